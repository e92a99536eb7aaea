use anyhow::Result;
use rmcp::{
    model::{
        GetPromptRequestParam, PromptMessageContent, ReadResourceRequestParam, ResourceContents,
    },
    service::ServiceError,
};
use serde_json::{json, Value};

use crate::common::InProcessSession;

async fn read_latest(session: &InProcessSession) -> Result<String> {
    let result = session
        .client
        .read_resource(ReadResourceRequestParam {
            uri: "todos://latest".into(),
        })
        .await?;
    match result.contents.first() {
        Some(ResourceContents::TextResourceContents { text, .. }) => Ok(text.clone()),
        other => anyhow::bail!("unexpected resource contents: {other:?}"),
    }
}

async fn summary_prompt(session: &InProcessSession) -> Result<String> {
    let result = session
        .client
        .get_prompt(GetPromptRequestParam {
            name: "todo_summary_prompt".into(),
            arguments: None,
        })
        .await?;
    match result.messages.first().map(|message| &message.content) {
        Some(PromptMessageContent::Text { text }) => Ok(text.clone()),
        other => anyhow::bail!("unexpected prompt content: {other:?}"),
    }
}

#[tokio::test]
async fn empty_list_reports_fixed_messages() -> Result<()> {
    let session = InProcessSession::start().await?;

    assert_eq!(
        session.call_text("list_todos", json!({})).await?,
        "Your to-do list is empty."
    );
    assert_eq!(
        session.call_text("get_latest_todo", json!({})).await?,
        "No to-dos yet."
    );
    assert_eq!(read_latest(&session).await?, "No to-dos yet.");
    assert_eq!(summary_prompt(&session).await?, "There are no to-do items.");

    session.shutdown().await
}

#[tokio::test]
async fn crud_round_trip_keeps_order_and_positions() -> Result<()> {
    let session = InProcessSession::start().await?;

    for item in ["write brief", "book studio", "send invoice"] {
        let confirmation = session.call_text("add_todo", json!({ "item": item })).await?;
        assert_eq!(confirmation, format!("Added to-do: '{item}'"));
    }
    assert_eq!(
        session.call_text("list_todos", json!({})).await?,
        "1. write brief\n2. book studio\n3. send invoice"
    );

    let updated = session
        .call_structured("update_todo", json!({ "index": 2, "new_item": "book room" }))
        .await?;
    assert_eq!(
        updated,
        json!({
            "status": "updated",
            "message": "Updated to-do 2: 'book studio' -> 'book room'",
            "length": 3
        })
    );

    let deleted = session
        .call_structured("delete_todo", json!({ "index": 1 }))
        .await?;
    assert_eq!(
        deleted,
        json!({
            "status": "deleted",
            "message": "Deleted to-do 1: 'write brief'",
            "length": 2
        })
    );
    assert_eq!(
        session.call_text("list_todos", json!({})).await?,
        "1. book room\n2. send invoice"
    );

    assert_eq!(read_latest(&session).await?, "send invoice");
    assert_eq!(
        summary_prompt(&session).await?,
        "Summarize the following to-do items: book room, send invoice"
    );
    assert_eq!(
        session.call_text("todo_summary_prompt", json!({})).await?,
        "Summarize the following to-do items: book room, send invoice"
    );

    session.shutdown().await
}

#[tokio::test]
async fn out_of_range_index_is_ordinary_result() -> Result<()> {
    let session = InProcessSession::start().await?;
    session.call_text("add_todo", json!({ "item": "only" })).await?;

    for index in [0, -3, 2] {
        let updated = session
            .call_structured("update_todo", json!({ "index": index, "new_item": "x" }))
            .await?;
        assert_eq!(updated.get("status"), Some(&json!("invalid_index")));
        assert_eq!(updated.get("message"), Some(&json!("Invalid index.")));

        let deleted = session
            .call_structured("delete_todo", json!({ "index": index }))
            .await?;
        assert_eq!(deleted.get("status"), Some(&json!("invalid_index")));
        assert_eq!(deleted.get("length"), Some(&Value::from(1)));
    }
    assert_eq!(session.call_text("list_todos", json!({})).await?, "1. only");

    session.shutdown().await
}

#[tokio::test]
async fn unknown_resource_and_prompt_are_protocol_errors() -> Result<()> {
    let session = InProcessSession::start().await?;

    let error = session
        .client
        .read_resource(ReadResourceRequestParam {
            uri: "todos://first".into(),
        })
        .await
        .expect_err("unknown URI must fail");
    let data = match error {
        ServiceError::McpError(inner) => inner.data,
        other => anyhow::bail!("unexpected error: {other:?}"),
    };
    assert_eq!(
        data.as_ref().and_then(|value| value.get("code")),
        Some(&json!("RESOURCE_NOT_FOUND"))
    );

    let error = session
        .client
        .get_prompt(GetPromptRequestParam {
            name: "weekly_digest".into(),
            arguments: None,
        })
        .await
        .expect_err("unknown prompt must fail");
    let data = match error {
        ServiceError::McpError(inner) => inner.data,
        other => anyhow::bail!("unexpected error: {other:?}"),
    };
    assert_eq!(
        data.as_ref().and_then(|value| value.get("code")),
        Some(&json!("PROMPT_NOT_FOUND"))
    );

    session.shutdown().await
}

#[tokio::test]
async fn resource_and_prompt_are_advertised() -> Result<()> {
    let session = InProcessSession::start().await?;

    let resources = session.client.list_resources(None).await?;
    assert!(
        resources
            .resources
            .iter()
            .any(|resource| resource.uri == "todos://latest"),
        "resources: {:?}",
        resources.resources
    );

    let prompts = session.client.list_prompts(None).await?;
    assert!(
        prompts
            .prompts
            .iter()
            .any(|prompt| prompt.name == "todo_summary_prompt"),
        "prompts: {:?}",
        prompts.prompts
    );

    session.shutdown().await
}
