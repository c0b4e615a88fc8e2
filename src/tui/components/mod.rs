//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as struct fields:
//! - `TitleBar`: Top status bar
//! - `TabBar`: Bottom navigation with click hit testing
//! - `TabContent`: Body of the active dashboard tab
//! - `Splash`: Startup screen
//! - `AlertView`: Modal message overlay
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `InputField`: Single-line text field, optionally masked
//! - `AuthFormState`: Sign-in / sign-up form, rendered through `AuthForm`
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status bar)
//! ├── tab_bar.rs       (Bottom navigation)
//! ├── tab_content.rs   (Home / Shop / About / Profile)
//! ├── splash.rs        (Startup screen)
//! ├── alert.rs         (Modal overlay)
//! ├── input_field.rs   (Text field)
//! └── auth_form.rs     (Login and signup forms)
//! ```

pub mod alert;
pub mod auth_form;
pub mod input_field;
pub mod splash;
pub mod tab_bar;
pub mod tab_content;
pub mod title_bar;

pub use alert::AlertView;
pub use auth_form::{AuthForm, AuthFormState, FormEvent, FormKind};
pub use splash::Splash;
pub use tab_bar::TabBar;
pub use tab_content::TabContent;
pub use title_bar::TitleBar;
