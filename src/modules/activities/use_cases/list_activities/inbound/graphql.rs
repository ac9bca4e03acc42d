use async_graphql::{Context, Object, SimpleObject};

use crate::modules::activities::core::activity::Activity;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone, Debug, PartialEq, Eq)]
#[graphql(name = "Activity")]
pub struct GqlActivity {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
    pub spots_left: u32,
}

impl GqlActivity {
    fn from_activity(name: String, activity: Activity) -> Self {
        Self {
            name,
            spots_left: activity.spots_left(),
            description: activity.description,
            schedule: activity.schedule,
            max_participants: activity.max_participants,
            participants: activity.participants,
        }
    }
}

#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn activities(&self, context: &Context<'_>) -> Vec<GqlActivity> {
        let state = context.data_unchecked::<AppState>();
        state
            .list_handler
            .handle()
            .await
            .into_iter()
            .map(|(name, activity)| GqlActivity::from_activity(name, activity))
            .collect()
    }

    async fn activity(&self, context: &Context<'_>, name: String) -> Option<GqlActivity> {
        let state = context.data_unchecked::<AppState>();
        let activity = state.list_handler.find(&name).await?;
        Some(GqlActivity::from_activity(name, activity))
    }
}
