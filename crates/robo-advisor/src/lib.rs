//! # robo-advisor
//!
//! Dialog fulfillment for the `RecommendPortfolio` intent of a
//! conversational robo-advisor bot.
//!
//! ## Flow
//!
//! ```text
//! ┌──────────────┐  IntentRequest   ┌─────────────────────────────────────┐
//! │              │ ───────────────▶ │  dispatch                            │
//! │   Dialog     │                  │   ├─ validate(age, investmentAmount) │
//! │   platform   │                  │   ├─ DialogCodeHook      → Delegate  │
//! │              │ ◀─────────────── │   ├─ FulfillmentCodeHook → Close     │
//! └──────────────┘  DialogResponse  │   └─ invalid slot        → Elicit    │
//!                                   └─────────────────────────────────────┘
//! ```
//!
//! The platform owns the conversation. This crate only answers one turn at a
//! time: re-prompt for a bad slot, let the platform continue, or close with a
//! bonds/equities recommendation for the chosen risk level.

pub mod dialog;
pub mod error;
pub mod handler;
pub mod model;
pub mod recommendation;
pub mod validation;

pub use error::{HandlerError, Result};
pub use handler::{PortfolioAdvisor, dispatch, handle};
pub use model::{
    DialogAction, DialogResponse, FulfillmentState, IntentRequest, InvocationSource, Message,
    RECOMMEND_PORTFOLIO_INTENT, SlotName, Slots,
};
pub use recommendation::{RiskLevel, recommend};
pub use validation::{ValidationPolicy, ValidationResult, validate};
