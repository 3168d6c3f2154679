mod block;
mod block_type;
mod content;
mod database;
mod page;
mod rich_text;
mod search;
mod user;

pub use block::*;
pub use block_type::*;
pub use content::*;
pub use database::*;
pub use page::*;
pub use rich_text::*;
pub use search::*;
pub use user::*;
