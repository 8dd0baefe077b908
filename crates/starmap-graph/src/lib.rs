pub mod config;
pub mod constellation;
pub mod detect;
pub mod model;
pub mod normalize;
pub mod starfield;
pub mod style;

pub use config::EngineConfig;
pub use constellation::{MIN_VISIBLE_STRENGTH, generate_constellations};
pub use detect::{
    Galaxy, SUPERNOVA_THRESHOLD, Supernova, WORMHOLE_THRESHOLD, Wormhole, detect_galaxies,
    detect_supernovas, detect_wormholes, try_detect_galaxies,
};
pub use model::{
    DegradedStage, ModelSummary, PipelineStage, VisualModel, build_visual_model,
    build_visual_model_with,
};
pub use normalize::{NormalizedNode, Z_DEPTH, normalize_coordinates, try_normalize_coordinates};
pub use starfield::{DEFAULT_STAR_COUNT, Star, Starfield, generate_starfield, seed_hash};
pub use style::{Color, compute_edge_color, compute_node_size, compute_risk_color};
