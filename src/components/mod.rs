pub mod help_bar;
pub mod join_form;
pub mod modal;
pub mod text_input;
pub mod ticket_view;

// Re-export the core Component trait
pub use crate::dispatch::Component;

pub use help_bar::{HelpBar, HelpBarProps};
pub use join_form::{JoinForm, JoinFormProps};
pub use text_input::{TextInput, TextInputProps};
pub use ticket_view::{TICKET_ICON, TicketView, TicketViewProps};
