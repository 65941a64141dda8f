//! LENS Workspace Folder Mapping
//!
//! Rewrites absolute script paths into paths rooted at a matching
//! workspace folder's display name, so the tree shows `proj/src/x.js`
//! instead of `/home/me/proj/src/x.js`. Paths outside every folder are
//! used verbatim.

mod folders;

pub use folders::{Rewrite, WorkspaceFolder, WorkspaceFolderId, WorkspaceFolders};
