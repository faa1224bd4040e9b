pub mod commit;
pub mod repo_ref;

pub use crate::model::commit::{Commit, CommitAuthor, CommitDetail};
pub use crate::model::repo_ref::RepoRef;
