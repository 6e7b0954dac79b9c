//! CLI subcommands.

pub mod fav;
pub mod list;
pub mod sale;
pub mod search;
pub mod show;

pub use fav::FavArgs;
pub use list::ListArgs;
pub use sale::SaleArgs;
pub use search::SearchArgs;
pub use show::ShowArgs;
