pub mod modules;
pub mod show;
pub mod template;
pub mod validate;
