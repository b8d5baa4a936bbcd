//! # vibe-gallery
//!
//! Backend for a visual-design discovery gallery: users filter a large
//! image corpus by free-text search and by one or more "vibe" concept
//! axes, each adjustable along a continuous spectrum between the concept
//! and its semantic opposite.
//!
//! ## Architecture
//!
//! Candidates are scored by an external Retrieval Service; opposites come
//! from an external Concept Metadata Service. Everything between arrival
//! and display is pure, synchronous ranking:
//!
//! ```text
//!   ┌────────────────────┐      ┌──────────────────────────┐
//!   │ Retrieval Service  │      │ Concept Metadata Service │
//!   │ (scored candidates)│      │ (concept → opposite)     │
//!   └─────────┬──────────┘      └────────────┬─────────────┘
//!             │ concept / opposite           │ first label
//!             │ candidate sets               ▼
//!             │                 ┌─────────────────────────┐
//!             └────────────────▶│  Axis (per concept)     │
//!                               │  slider position ∈ [0,1]│
//!                               └────────────┬────────────┘
//!                                            │
//!                               ┌────────────▼────────────┐
//!                               │ Dedup-Merge (max score) │
//!                               └────────────┬────────────┘
//!                               ┌────────────▼────────────┐
//!                               │ 10 percentile tiers     │
//!                               └────────────┬────────────┘
//!                               ┌────────────▼────────────┐
//!                               │ Stop resolve + rotation │
//!                               │ (1 tier shift per stop) │
//!                               └────────────┬────────────┘
//!                                            │ per-axis ordering
//!                               ┌────────────▼────────────┐
//!                               │ Multi-axis fusion       │
//!                               │ Σ 1/(rank+1), consensus │
//!                               └────────────┬────────────┘
//!                                            ▼
//!                                    displayed ordering
//! ```
//!
//! Rotating tier priority by one band per slider stop keeps re-ranking
//! visually smooth while dragging: adjacent stops reorder a single
//! 10%-percentile band instead of reshuffling the whole gallery.
//!
//! ## Module Overview
//!
//! - [`config`] - Environment-based configuration for the server and both upstream services
//! - [`models`] - Shared data types: `Candidate`, axis views, request/response types
//! - [`ranking::dedup`] - Max-score dedup of candidate lists
//! - [`ranking::tiers`] - Percentile tier partitioning
//! - [`ranking::stops`] - Continuous position → discrete stop + side
//! - [`ranking::rotate`] - Rotation-based tier priority with opposite-side fallbacks
//! - [`ranking::fuse`] - Positional-score fusion across active axes
//! - [`engine`] - The controller owning axes, recomputes, and staleness generations
//! - [`services`] - Reqwest clients for the two upstream services
//! - [`api`] - Axum HTTP handlers for search, axes, and results
//! - [`state`] - Shared application state

pub mod api;
pub mod config;
pub mod engine;
pub mod models;
pub mod ranking;
pub mod services;
pub mod state;
