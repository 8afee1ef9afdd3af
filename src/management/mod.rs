mod bucket;
mod credential;

pub use bucket::BucketStore;
pub use credential::CredentialCache;
pub use credential::TokenSource;
