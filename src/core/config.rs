use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub dataset_path: PathBuf,
    pub text_field: String,

    pub default_limit: usize,
    pub max_token_length: usize,

    pub btree_min_degree: usize,       // CLRS `t`; nodes hold at most 2t-1 keys
    pub fuzzy_max_distance: u8,        // edit distance bound for fuzzy queries

    // Canned inputs for simulation mode
    pub simulation_queries: Vec<String>,
    pub simulation_limits: Vec<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            dataset_path: PathBuf::from("dataset/Books_5-core.json"),
            text_field: "reviewText".to_string(),

            default_limit: 500,
            max_token_length: 255,

            btree_min_degree: 16,
            fuzzy_max_distance: 1,

            simulation_queries: vec![
                "book".to_string(),
                "funny".to_string(),
                "great".to_string(),
                "bo".to_string(),
            ],
            simulation_limits: vec![100, 500, 1000],
        }
    }
}
