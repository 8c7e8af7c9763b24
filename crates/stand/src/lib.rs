// Bench stand. All measurement lives in `benches/`; the data files are
// produced by the build script through `loc-tally-model`.
