use httpmock::prelude::*;
use somedata_cli::{CliConfig, Console, Dispatcher, Repl, ReqwestTransport};

fn repl_for(base_url: String) -> Repl<ReqwestTransport> {
    let config = CliConfig {
        base_url,
        ..CliConfig::default()
    };
    let transport = ReqwestTransport::new(&config).unwrap();
    Repl::new(Dispatcher::new(transport), Console::plain())
}

async fn run(repl: &Repl<ReqwestTransport>, input: &str) -> String {
    let mut out = Vec::new();
    repl.run(input.as_bytes(), &mut out).await.unwrap();
    String::from_utf8(out).unwrap()
}

#[tokio::test]
async fn test_session_runs_every_verb() {
    let server = MockServer::start_async().await;
    let list_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/somedata/").query_param("sorted", "True");
            then.status(200).body(r#"[{"dataId":"a"},{"dataId":"b"}]"#);
        })
        .await;
    let post_mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/somedata/").body(r#"{"dataId": "c", "weight": 3}"#);
            then.status(201);
        })
        .await;
    let put_mock = server
        .mock_async(|when, then| {
            when.method(PUT).path("/somedata/c").body(r#"{"weight": 4}"#);
            then.status(200);
        })
        .await;
    let delete_mock = server
        .mock_async(|when, then| {
            when.method(DELETE).path("/somedata/c");
            then.status(200);
        })
        .await;

    let repl = repl_for(server.url("/somedata/"));
    let output = run(
        &repl,
        concat!(
            "get --sorted True\n",
            "post {\"dataId\": \"c\", \"weight\": 3}\n",
            "put c {\"weight\": 4}\n",
            "delete c\n",
            "q\n",
        ),
    )
    .await;

    list_mock.assert_async().await;
    post_mock.assert_async().await;
    put_mock.assert_async().await;
    delete_mock.assert_async().await;

    assert!(output.contains("Server response:\n[{\"dataId\":\"a\"},{\"dataId\":\"b\"}]\n"));
    assert!(output.contains("Return code: 201 Created"));
    assert_eq!(output.matches("Return code: 200 OK").count(), 2);
}

#[tokio::test]
async fn test_failed_status_prints_code_and_message() {
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/somedata/missing");
            then.status(404).body("not found");
        })
        .await;

    let repl = repl_for(server.url("/somedata/"));
    let output = run(&repl, "get --id missing\nq\n").await;

    api_mock.assert_async().await;
    assert!(output.contains("Return code: 404 Not Found\nMessage: not found\n"));
}

#[tokio::test]
async fn test_unknown_and_malformed_commands_send_nothing() {
    let server = MockServer::start_async().await;
    let any_mock = server
        .mock_async(|when, then| {
            when.path_contains("/somedata");
            then.status(200);
        })
        .await;

    let repl = repl_for(server.url("/somedata/"));
    let output = run(&repl, "hello\nput 42\ndelete\nq\n").await;

    assert_eq!(any_mock.hits_async().await, 0);
    assert!(output.contains("Program: unknown command"));
    assert!(output.contains("Put usage: put {id} {\"dataId\": \"someId\", \"weight\": 42}"));
    assert_eq!(output.matches("Delete usage: delete {id}").count(), 2);
}

#[tokio::test]
async fn test_loop_survives_connection_failure() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let repl = repl_for(format!("http://127.0.0.1:{}/somedata/", port));
    let output = run(
        &repl,
        "get\ndelete 1\npost {\"a\":1}\nput 1 {\"a\":1}\nq\n",
    )
    .await;

    assert_eq!(output.matches("HTTP request failed").count(), 4);
    assert_eq!(
        output
            .matches("Check that the server is running and reachable")
            .count(),
        4
    );
    assert!(!output.contains("Server response:"));
    // one prompt per line read
    assert_eq!(output.matches("Command prompt >>> ").count(), 5);
}
