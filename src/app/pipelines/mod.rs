pub mod recommend_pipeline;

pub use recommend_pipeline::RecommendPipeline;
