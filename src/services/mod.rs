//! HTTP clients for the external collaborators: the Retrieval Service
//! (embedding search over the image corpus) and the Concept Metadata
//! Service (concept → opposite-label lookup).

pub mod concepts;
pub mod retrieval;
