// Resume targets: criticality × toughness lookup and delivery progress for dashboards.

pub mod handlers;
pub mod progress;
pub mod resolver;
pub mod source;
