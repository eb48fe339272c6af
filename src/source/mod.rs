// Price-list discovery

pub mod folder;
pub mod traits;

pub use folder::FolderSource;
pub use traits::PriceSource;
