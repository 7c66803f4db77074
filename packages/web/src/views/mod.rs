mod shell;
pub use shell::Shell;

mod login;
pub use login::Login;

mod pages;
pub use pages::{Chat, Dashboard, Emails, Prompt, Regulations, Reports, SentEmails, Users};
