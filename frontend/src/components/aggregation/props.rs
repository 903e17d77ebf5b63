use yew::prelude::*;

/// Properties for the aggregation query form.
#[derive(Properties, PartialEq, Clone)]
pub struct AggregationQueryProps {
    /// Heading shown above the form.
    #[prop_or_else(|| "DistributedData Aggregation System".to_string())]
    pub title: String,
}
