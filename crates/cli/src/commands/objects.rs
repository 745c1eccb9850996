//! Object CRUD, sync and group membership commands.

use anyhow::Result;
use op5_client::{ObjectType, Session, SyncOutcome};
use serde_json::{Value, json};

use super::{parse_data, print_json};

pub async fn create(session: &mut Session<'_>, object_type: ObjectType, data: &str) -> Result<()> {
    let response = session.create(object_type, parse_data(data)?).await?;
    print_json(&response.payload)
}

pub async fn read(session: &mut Session<'_>, object_type: ObjectType, name: Option<&str>) -> Result<()> {
    let response = session.read(object_type, name.unwrap_or_default()).await?;
    print_json(&response.payload)
}

pub async fn update(
    session: &mut Session<'_>,
    object_type: ObjectType,
    name: &str,
    data: &str,
) -> Result<()> {
    let response = session.update(object_type, name, parse_data(data)?).await?;
    print_json(&response.payload)
}

pub async fn overwrite(
    session: &mut Session<'_>,
    object_type: ObjectType,
    name: &str,
    data: &str,
) -> Result<()> {
    let response = session
        .overwrite(object_type, name, parse_data(data)?)
        .await?;
    print_json(&response.payload)
}

pub async fn delete(session: &mut Session<'_>, object_type: ObjectType, name: &str) -> Result<()> {
    let response = session.delete(object_type, name).await?;
    print_json(&response.payload)
}

pub async fn sync(
    session: &mut Session<'_>,
    object_type: ObjectType,
    name: &str,
    data: &str,
) -> Result<()> {
    let output = match session.sync(object_type, name, parse_data(data)?).await? {
        SyncOutcome::Created(response) => json!({"outcome": "created", "response": response.payload}),
        SyncOutcome::Updated(response) => json!({"outcome": "updated", "response": response.payload}),
        SyncOutcome::Unchanged => json!({"outcome": "unchanged"}),
    };
    print_json(&output)
}

pub async fn members(session: &mut Session<'_>, group_type: ObjectType, name: &str) -> Result<()> {
    let members = session.get_group_members(group_type, name).await?;
    print_json(&Value::from(members))
}
