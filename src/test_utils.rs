pub const TINY_MAZE_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/mazes/tiny_maze.lay"
));

pub const OPEN_MAZE_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/mazes/open_maze.lay"
));

pub const CYCLIC_MAZE_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/mazes/cyclic_maze.lay"
));

pub const WALLED_MAZE_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/mazes/walled_maze.lay"
));

pub const DIAMOND_GRAPH_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/graphs/diamond.toml"
));

pub const DETOUR_GRAPH_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/graphs/detour.toml"
));

pub const CHAIN_GRAPH_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/graphs/chain.toml"
));

pub const TIED_GRAPH_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/graphs/tied.toml"
));

pub const CYCLIC_GRAPH_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/graphs/cyclic.toml"
));

pub const DISCONNECTED_GRAPH_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/graphs/disconnected.toml"
));
