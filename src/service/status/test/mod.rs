use reqwest::StatusCode;
use serenity::async_trait;
use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};
use url::Url;

use crate::{
    error::probe::ProbeError,
    model::status::{EndpointCheck, HealthResult, HealthState},
    service::{
        browser::{BrowserLauncher, BrowserSession},
        fetch::{FetchedResponse, HttpFetcher},
        status::StatusReportService,
    },
};

mod json_api;

#[derive(Clone)]
enum FakeReply {
    Respond {
        status: StatusCode,
        body: String,
        delay: Duration,
    },
    Timeout,
}

/// In-memory `HttpFetcher` with canned replies per URL.
///
/// Unknown URLs behave like a timeout. Counts how often a body was read so
/// tests can assert that reachability checks never inspect it.
#[derive(Default)]
pub struct FakeFetcher {
    replies: HashMap<String, FakeReply>,
    body_reads: AtomicUsize,
}

impl FakeFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, url: &str, status: u16, body: impl Into<String>) -> Self {
        self.respond_after(url, status, body, Duration::ZERO)
    }

    pub fn respond_after(
        mut self,
        url: &str,
        status: u16,
        body: impl Into<String>,
        delay: Duration,
    ) -> Self {
        self.replies.insert(
            key(url),
            FakeReply::Respond {
                status: StatusCode::from_u16(status).unwrap(),
                body: body.into(),
                delay,
            },
        );
        self
    }

    pub fn time_out(mut self, url: &str) -> Self {
        self.replies.insert(key(url), FakeReply::Timeout);
        self
    }

    pub fn body_reads(&self) -> usize {
        self.body_reads.load(Ordering::SeqCst)
    }

    async fn reply(&self, url: &Url) -> Result<(StatusCode, String), ProbeError> {
        match self.replies.get(url.as_str()).cloned() {
            Some(FakeReply::Respond {
                status,
                body,
                delay,
            }) => {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                Ok((status, body))
            }
            Some(FakeReply::Timeout) | None => Err(ProbeError::Timeout {
                url: url.to_string(),
            }),
        }
    }
}

fn key(url: &str) -> String {
    Url::parse(url).unwrap().to_string()
}

#[async_trait]
impl HttpFetcher for FakeFetcher {
    async fn fetch(&self, url: &Url) -> Result<FetchedResponse, ProbeError> {
        self.body_reads.fetch_add(1, Ordering::SeqCst);
        let (status, body) = self.reply(url).await?;
        Ok(FetchedResponse { status, body })
    }

    async fn fetch_status(&self, url: &Url) -> Result<StatusCode, ProbeError> {
        let (status, _) = self.reply(url).await?;
        Ok(status)
    }
}

/// What a fake browser session does when asked to render.
#[derive(Clone)]
pub enum FakeRender {
    Html(String),
    Fail,
    Panic,
}

/// `BrowserLauncher` that tracks how many sessions are alive.
///
/// `live()` must return to zero once a check completes; anything else means a
/// session (and in production, a Chrome process) leaked.
pub struct FakeLauncher {
    render: FakeRender,
    fail_launch: bool,
    launches: AtomicUsize,
    live: Arc<AtomicUsize>,
}

impl FakeLauncher {
    pub fn rendering(render: FakeRender) -> Self {
        Self {
            render,
            fail_launch: false,
            launches: AtomicUsize::new(0),
            live: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn html(html: String) -> Self {
        Self::rendering(FakeRender::Html(html))
    }

    pub fn unlaunchable() -> Self {
        Self {
            fail_launch: true,
            ..Self::rendering(FakeRender::Fail)
        }
    }

    pub fn launches(&self) -> usize {
        self.launches.load(Ordering::SeqCst)
    }

    pub fn live(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }
}

impl BrowserLauncher for FakeLauncher {
    fn launch(&self) -> Result<Box<dyn BrowserSession>, ProbeError> {
        if self.fail_launch {
            return Err(ProbeError::Browser("chrome binary not found".to_string()));
        }

        self.launches.fetch_add(1, Ordering::SeqCst);
        self.live.fetch_add(1, Ordering::SeqCst);

        Ok(Box::new(FakeSession {
            render: self.render.clone(),
            live: self.live.clone(),
        }))
    }
}

struct FakeSession {
    render: FakeRender,
    live: Arc<AtomicUsize>,
}

impl BrowserSession for FakeSession {
    fn rendered_html(&mut self, _url: &Url, _settle: Duration) -> Result<String, ProbeError> {
        match &self.render {
            FakeRender::Html(html) => Ok(html.clone()),
            FakeRender::Fail => Err(ProbeError::Browser("target crashed".to_string())),
            FakeRender::Panic => panic!("renderer panicked"),
        }
    }
}

impl Drop for FakeSession {
    fn drop(&mut self) {
        self.live.fetch_sub(1, Ordering::SeqCst);
    }
}

const GH_URL: &str = "https://www.githubstatus.com/api/v2/status.json";

fn gh_endpoint() -> EndpointCheck {
    EndpointCheck::json_api("gh", GH_URL)
        .unwrap()
        .with_marker("All Systems Operational")
}

fn no_browser() -> Arc<FakeLauncher> {
    Arc::new(FakeLauncher::unlaunchable())
}
