// EXPOTEN product page sections
// Every stateful section takes the page state signal as a prop.

mod cct_scale;
mod contacts;
mod export_bar;
mod footer;
mod header;
mod hero;
mod right_blocks;
mod thumbnails;
mod upload_panel;
mod views;

pub use cct_scale::CctScale;
pub use contacts::Contacts;
pub use export_bar::ExportBar;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use right_blocks::RightBlocks;
pub use thumbnails::Thumbnails;
pub use upload_panel::UploadPanel;
pub use views::Views;
