//! Scenarios that read the same for every resource.

use bookstore_core::{Resource, ResourceClient};

use crate::check::{self, ScenarioError};
use crate::outcome::{Outcome, Step};

/// Listing answers 200 with more than an empty-array marker.
pub fn list_not_empty<R: Resource>(client: &ResourceClient<R>) -> Result<Outcome, ScenarioError> {
    let response = client.get_all()?;
    check::status_in(Step::GetAll, &response, check::OK)?;
    check::ensure(
        Step::GetAll,
        response.body.len() > 2,
        format!("{} response body should not be empty", R::PATH),
    )?;
    tracing::info!(resource = R::PATH, bytes = response.body.len(), "get all returned");
    Ok(Outcome::Passed)
}

/// When the listing mentions ids, `id` is fetched and must decode with an id.
pub fn lookup_seeded<R: Resource>(client: &ResourceClient<R>, id: i64) -> Result<Outcome, ScenarioError> {
    let all = client.get_all()?;
    check::status_in(Step::GetAll, &all, check::OK)?;
    if !all.body.contains("\"id\"") {
        tracing::info!(resource = R::PATH, "listing carries no ids, skipping lookup");
        return Ok(Outcome::Passed);
    }

    let response = client.get_by_id(id)?;
    let status = check::status_in(Step::Fetch, &response, check::SEEDED_LOOKUP_TOLERATED)?;
    if status == 200 {
        let record: R = response.json()?;
        check::present(Step::Fetch, "id", record.id())?;
        tracing::info!(resource = R::PATH, id, "get by id returned a record");
    } else {
        tracing::info!(resource = R::PATH, id, status, "get by id found nothing");
    }
    Ok(Outcome::Passed)
}

/// Any id, existing or not, answers within `LOOKUP_TOLERATED`.
pub fn lookup_tolerated<R: Resource>(client: &ResourceClient<R>, id: i64) -> Result<Outcome, ScenarioError> {
    let response = client.get_by_id(id)?;
    let status = check::status_in(Step::Fetch, &response, check::LOOKUP_TOLERATED)?;
    tracing::info!(resource = R::PATH, id, status, "get by id returned");
    Ok(Outcome::Passed)
}

/// A doubtful payload is answered without a server error.
pub fn create_handled<R: Resource>(client: &ResourceClient<R>, entity: &R) -> Result<Outcome, ScenarioError> {
    let response = client.create(entity)?;
    let status = check::status_within(Step::Create, &response, check::HANDLED)?;
    tracing::info!(resource = R::PATH, status, "invalid data handled");
    Ok(Outcome::Passed)
}
