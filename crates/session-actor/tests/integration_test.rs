use async_trait::async_trait;
use session_actor::{FrameworkError, SessionActor, SessionEntity};
use std::sync::Arc;

// --- Test Entity ---

/// A bar tab: drinks are priced from a shared list injected as context.
#[derive(Debug)]
struct Tab {
    drinks: Vec<String>,
    settled: bool,
}

#[derive(Debug)]
enum TabCommand {
    Pour(String),
    Settle,
}

#[derive(Debug, thiserror::Error)]
enum TabError {
    #[error("unknown drink: {0}")]
    UnknownDrink(String),
    #[error("tab already settled")]
    Settled,
    #[error("tabs must be opened with a name")]
    Anonymous,
}

type PriceList = Arc<Vec<(&'static str, u32)>>;

#[async_trait]
impl SessionEntity for Tab {
    type Id = u32;
    type Open = String;
    type Command = TabCommand;
    type Outcome = u32;
    type View = (usize, u32);
    type Context = PriceList;
    type Error = TabError;

    fn open(_id: u32, name: String, _ctx: &PriceList) -> Result<Self, TabError> {
        if name.trim().is_empty() {
            return Err(TabError::Anonymous);
        }
        Ok(Self {
            drinks: Vec::new(),
            settled: false,
        })
    }

    async fn handle_command(
        &mut self,
        command: TabCommand,
        ctx: &PriceList,
    ) -> Result<u32, TabError> {
        if self.settled {
            return Err(TabError::Settled);
        }
        match command {
            TabCommand::Pour(drink) => {
                if !ctx.iter().any(|(name, _)| *name == drink) {
                    return Err(TabError::UnknownDrink(drink));
                }
                self.drinks.push(drink);
                Ok(total(&self.drinks, ctx))
            }
            TabCommand::Settle => {
                self.settled = true;
                Ok(total(&self.drinks, ctx))
            }
        }
    }

    fn view(&self, ctx: &PriceList) -> (usize, u32) {
        (self.drinks.len(), total(&self.drinks, ctx))
    }
}

fn total(drinks: &[String], prices: &PriceList) -> u32 {
    drinks
        .iter()
        .filter_map(|d| prices.iter().find(|(name, _)| name == d).map(|(_, p)| *p))
        .sum()
}

fn price_list() -> PriceList {
    Arc::new(vec![("stout", 6), ("cider", 5)])
}

// --- Tests ---

#[tokio::test]
async fn test_session_full_lifecycle() {
    let (actor, client) = SessionActor::<Tab>::new(10);
    let handle = tokio::spawn(actor.run(price_list()));

    let id = client.open("Alice".to_string()).await.unwrap();
    assert_eq!(id, 1);

    assert_eq!(client.command(id, TabCommand::Pour("stout".into())).await.unwrap(), 6);
    assert_eq!(client.command(id, TabCommand::Pour("cider".into())).await.unwrap(), 11);
    assert_eq!(client.view(id).await.unwrap(), Some((2, 11)));

    assert_eq!(client.command(id, TabCommand::Settle).await.unwrap(), 11);
    let after = client.command(id, TabCommand::Pour("stout".into())).await;
    assert!(matches!(after, Err(FrameworkError::Entity(_))));

    client.close(id).await.unwrap();
    assert_eq!(client.view(id).await.unwrap(), None);

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_sessions_are_isolated() {
    let (actor, client) = SessionActor::<Tab>::new(10);
    tokio::spawn(actor.run(price_list()));

    let first = client.open("Alice".to_string()).await.unwrap();
    let second = client.open("Bob".to_string()).await.unwrap();
    assert_ne!(first, second);

    client.command(first, TabCommand::Pour("stout".into())).await.unwrap();
    assert_eq!(client.view(second).await.unwrap(), Some((0, 0)));
}

#[tokio::test]
async fn test_open_and_command_failures() {
    let (actor, client) = SessionActor::<Tab>::new(10);
    tokio::spawn(actor.run(price_list()));

    let refused = client.open("   ".to_string()).await;
    match refused {
        Err(FrameworkError::Entity(e)) => assert!(e.to_string().contains("opened with a name")),
        other => panic!("Expected entity error, got {other:?}"),
    }

    let missing = client.command(99, TabCommand::Settle).await;
    assert!(matches!(missing, Err(FrameworkError::NotFound(id)) if id == "99"));

    let id = client.open("Carol".to_string()).await.unwrap();
    let unknown = client.command(id, TabCommand::Pour("absinthe".into())).await;
    match unknown {
        Err(FrameworkError::Entity(e)) => assert_eq!(e.to_string(), "unknown drink: absinthe"),
        other => panic!("Expected entity error, got {other:?}"),
    }
    assert_eq!(client.view(id).await.unwrap(), Some((0, 0)));
}

#[tokio::test]
async fn test_client_reports_closed_actor() {
    let (actor, client) = SessionActor::<Tab>::new(1);
    drop(actor);

    let result = client.open("Dave".to_string()).await;
    assert!(matches!(result, Err(FrameworkError::ActorClosed)));
}
