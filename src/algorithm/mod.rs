/// Block compositing along the seam
pub mod compositor;
/// Masked block dissimilarity
pub mod cost;
/// Shortest paths, cut recovery and seam endpoints
pub mod dijkstra;
/// Quilt engine and grid traversal
pub mod executor;
/// Overlap masks and cut types
pub mod mask;
/// Cut removal and segment classification
pub mod partition;
/// Random block sampling
pub mod sampler;
/// Seam graph construction
pub mod seam;
/// Best-candidate block selection
pub mod selection;
