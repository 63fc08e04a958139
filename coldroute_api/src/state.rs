use coldroute_planner::config::LivePlanner;

pub struct AppState {
    pub planner: LivePlanner,
}
