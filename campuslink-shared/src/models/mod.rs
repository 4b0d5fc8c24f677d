/// Wire-format entity types
///
/// These are the entities as consumed by the client; authoritative storage is
/// the remote database service. Every screen holds its own transient copy of
/// whatever it fetched - there is no shared cache and no cross-screen
/// coherence, so a mutation is followed by a reload of the affected
/// collection(s).
///
/// One module per entity:
///
/// - `event`: events, milestones, timeline entries
/// - `team`: teams, the team status machine, join requests, solo participants
/// - `resource`: event resources (links, decks, repos)
/// - `faq`: event FAQ entries
/// - `post`: feed posts
/// - `comment`: post comments
/// - `job`: internships/jobs and applications
/// - `startup`: startup profiles and approval state
/// - `profile`: user profiles
/// - `notification`: notification read surface

pub mod comment;
pub mod event;
pub mod faq;
pub mod job;
pub mod notification;
pub mod post;
pub mod profile;
pub mod resource;
pub mod startup;
pub mod team;
