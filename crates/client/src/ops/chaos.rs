use common::api::chaos::*;

use crate::{FabricClient, Result};

impl FabricClient {
    /// Whether Chaos is running, with the parameters it was started with.
    pub async fn get_chaos(&self, params: &GetChaosOptionalParams) -> Result<GetChaosResponse> {
        let req = self.get(&["Tools", "Chaos"], "6.2", params);
        self.send_json("get_chaos", req).await
    }

    pub async fn start_chaos(
        &self,
        chaos_parameters: &ChaosParameters,
        params: &StartChaosOptionalParams,
    ) -> Result<()> {
        let req = self
            .post(&["Tools", "Chaos", "$", "Start"], "6.0", params)
            .json(chaos_parameters);
        self.send_empty("start_chaos", req).await
    }

    /// Stops Chaos and the schedule driving it.
    pub async fn stop_chaos(&self, params: &StopChaosOptionalParams) -> Result<()> {
        let req = self.post(&["Tools", "Chaos", "$", "Stop"], "6.0", params);
        self.send_empty("stop_chaos", req).await
    }

    pub async fn get_chaos_events(
        &self,
        params: &GetChaosEventsOptionalParams,
    ) -> Result<GetChaosEventsResponse> {
        let req = self.get(&["Tools", "Chaos", "Events"], "6.2", params);
        self.send_json("get_chaos_events", req).await
    }

    pub async fn get_chaos_schedule(
        &self,
        params: &GetChaosScheduleOptionalParams,
    ) -> Result<GetChaosScheduleResponse> {
        let req = self.get(&["Tools", "Chaos", "Schedule"], "6.2", params);
        self.send_json("get_chaos_schedule", req).await
    }

    /// Replaces the schedule. `schedule.version` must match the current
    /// version or the cluster rejects the update.
    pub async fn post_chaos_schedule(
        &self,
        schedule: &ChaosScheduleDescription,
        params: &PostChaosScheduleOptionalParams,
    ) -> Result<()> {
        let req = self
            .post(&["Tools", "Chaos", "Schedule"], "6.2", params)
            .json(schedule);
        self.send_empty("post_chaos_schedule", req).await
    }
}
