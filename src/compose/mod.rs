pub mod composer;
pub mod templates;

pub use composer::ReplyComposer;
