// Integration tests for batch order book analysis
//
// These tests drive the full stack against a mock quote endpoint:
// - HTTP quote client → synthesizer → analysis → signal
// - Per-ticker failure isolation in a batch
// - Client-side throttling between quote requests
