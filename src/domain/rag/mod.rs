//! RAG module - Traffic-light classification of progress values.
//!
//! Two distinct, both-supported classification modes exist:
//!
//! 1. Percentage thresholds ([`progress_to_rag`]) - classifies a blended
//!    progress percentage against an injectable threshold table.
//! 2. Indicator proportion ([`classify_indicator_mix`]) - classifies a
//!    key result from the mix of its indicators' individual statuses.
//!
//! The two modes can disagree for the same key result. Views choose
//! which mode applies; that divergence is documented product behavior,
//! not something to reconcile here.

mod classifier;

pub use classifier::{classify_indicator_mix, progress_to_rag, score_to_rag};
