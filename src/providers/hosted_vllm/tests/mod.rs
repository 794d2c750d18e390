// Tests for the hosted vLLM provider
//
// - `mapping` - map_openai_params, endpoint info, provider construction
// - `schema` - recursive tool schema cleaning

mod schema;
