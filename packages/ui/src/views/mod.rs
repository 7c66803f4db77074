mod shell;
pub use shell::ShellView;

mod login;
pub use login::LoginView;

mod dashboard;
pub use dashboard::DashboardView;

mod users;
pub use users::UsersView;

mod regulations;
pub use regulations::RegulationsView;

mod reports;
pub use reports::ReportsView;

mod emails;
pub use emails::EmailsView;

mod sent_emails;
pub use sent_emails::SentEmailsView;

mod chat;
pub use chat::ChatView;

mod prompt;
pub use prompt::PromptView;
