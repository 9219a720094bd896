// Social Graph demo - runs a fixed script of users, posts, likes, comments and messages

use tracing::info;
use tracing_subscriber::EnvFilter;

use social_graph::{config::Config, PostId, SocialGraph, UserId};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    let graph = SocialGraph::with_config(&config.trending);
    let n = config.demo.users.max(1);
    let next = |i: i64| i % n + 1;

    info!("Adding {} users", n);
    for i in 1..=n {
        graph.add_user(UserId::new(i), &format!("User{}", i)).await?;
    }

    for i in 1..=n {
        graph
            .create_post(UserId::new(i), &format!("This is post {} from User{}", i, i))
            .await?;
    }
    println!("{}", serde_json::to_string_pretty(&graph.list_posts().await)?);

    // Post ids are handed out in creation order, so user i owns post i
    for i in 1..=n {
        graph.like_post(UserId::new(i), PostId::new(i)).await?;
    }
    for i in 1..=n {
        graph.unlike_post(UserId::new(i), PostId::new(i)).await?;
    }

    for i in 1..=n {
        graph
            .comment_on_post(
                UserId::new(i),
                PostId::new(next(i)),
                &format!("Nice post, User{}!", next(i)),
            )
            .await?;
    }

    for i in 1..=n {
        graph
            .send_message(UserId::new(i), UserId::new(next(i)), &format!("Hello from User{}", i))
            .await?;
    }
    println!("{}", serde_json::to_string_pretty(&graph.list_users().await)?);

    for i in 1..=n {
        for message in graph.drain_messages(UserId::new(i)).await? {
            println!("Message for User{} from User{}: {}", i, message.sender, message.content);
        }
    }

    graph.like_post(UserId::new(2.min(n)), PostId::new(2.min(n))).await?;
    graph.like_post(UserId::new(3.min(n)), PostId::new(3.min(n))).await?;
    graph.like_post(UserId::new(1), PostId::new(3.min(n))).await?;

    for likes in 0..=5 {
        match graph.find_post_by_like_count(likes).await {
            Ok(post_id) => println!("Post with {} likes found: post {}", likes, post_id),
            Err(_) => println!("No post found with {} likes", likes),
        }
    }

    for entry in graph.top_active(n as usize).await {
        println!("Active user {} with score {}", entry.user_id, entry.score);
    }
    for (post_id, likes) in graph.top_trending(5).await {
        println!("Trending post {} ({} likes)", post_id, likes);
    }

    info!("Demo completed");
    Ok(())
}
