pub mod draft;
pub mod rules;
pub mod sanitize;
pub mod submit;
pub mod validator;
