//! Publishing posts to the blog
//!
//! The form renders its markdown and builds a request; the worker thread sends
//! it; `report_outcome` turns the reply into a notification.

mod markdown;
mod outcome;
mod publish_client;
mod publish_form;
mod publish_state;
mod tags;
mod worker;

pub use markdown::render_markdown;
pub use outcome::{GENERIC_FAILURE_MESSAGE, Navigation, PUBLISHED_MESSAGE, report_outcome};
pub use publish_client::{PublishClient, PublishError, PublishResponse};
pub use publish_form::{FormError, FormField, PublishForm, PublishRequest};
pub use publish_state::{PublishState, SubmitError};
pub use tags::{join_tags, parse_tags};
pub use worker::{PublishJob, PublishOutcome, spawn_worker};
