//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as parameters:
//! - `TitleBar`: shop name, screen, status
//! - `OrderLines`: the running order with its total
//! - `Receipt`: the final summary
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that keep presentation state in `TuiState` and turn keys into
//! core `Action`s:
//! - `NameInput`: single-line customer name field
//! - `FrontPageState`: the two-entry start menu
//! - `BuilderState`: custom pizza builder
//! - `PickerState`: pre-made pizza picker
//!
//! Screens follow the persistent state + transient wrapper pattern: the
//! `*State` lives across frames, the screen struct borrows it plus `&App`
//! for one render.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs             (this file)
//! ├── title_bar.rs       (top status bar)
//! ├── name_input.rs      (customer name field)
//! ├── order_lines.rs     (current order list + total)
//! ├── front_page.rs      (start menu)
//! ├── custom_pizza.rs    (builder screen)
//! ├── premade_picker.rs  (catalog screen)
//! └── receipt.rs         (receipt screen)
//! ```

mod title_bar;
pub use title_bar::TitleBar;

pub mod custom_pizza;
pub mod front_page;
pub mod name_input;
pub mod order_lines;
pub mod premade_picker;
pub mod receipt;

pub use custom_pizza::{BuilderState, CustomPizzaScreen};
pub use front_page::{FrontPage, FrontPageState};
pub use premade_picker::{PickerState, PreMadePizzaScreen};
pub use receipt::Receipt;
