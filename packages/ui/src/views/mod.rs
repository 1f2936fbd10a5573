mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod app_root;
pub use app_root::AppRoot;

mod login;
pub use login::LoginView;

mod register;
pub use register::RegisterForm;

mod shell;
pub use shell::AppShell;

mod dashboard;
pub use dashboard::DashboardView;

mod booking;
pub use booking::BookingView;

mod profile;
pub use profile::ProfileView;
