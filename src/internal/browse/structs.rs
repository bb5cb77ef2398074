pub mod browser_file;
pub mod dav_listing;
pub mod listing_error;
pub mod read_folder_operation;

// 重导出公共类型
pub use browser_file::BrowserFile;
pub use dav_listing::{DavListing, ListingStatus};
pub use listing_error::ListingError;
pub use read_folder_operation::ReadFolderOperation;
