pub mod chat_widget;
pub mod hero;
pub mod impact;
pub mod services;
