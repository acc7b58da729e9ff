pub mod csv_export;
pub mod widget_page;

pub use csv_export::{export_trades_to_path, write_trades_csv};
pub use widget_page::{render_widget_page, write_widget_page};
