mod locate;
mod suffix;

pub use locate::{most_recent_backup_file, DirectoryListing, FsDirectoryListing};
pub use suffix::{
    backup_file_name, backup_file_name_now, is_backup_name, original_file_path, BACKUP_MARKER,
    TIMESTAMP_FORMAT,
};
