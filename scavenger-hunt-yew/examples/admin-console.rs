use scavenger_hunt_core::{EntryDraft, StoreCommand, StoreEvent};
use scavenger_hunt_yew::{
    init_tracing, use_leaderboard, use_posts, use_store, use_top_entries, AdminLogin, AdminOnly,
    AuthProvider, StoreProvider,
};
use yew::prelude::*;

#[function_component(Feed)]
fn feed() -> Html {
    let posts = use_posts();

    html! {
        <ul class="hunt-feed">
            {for posts.iter().map(|post| html! {
                <li key={post.id}>
                    <strong>{post.title.clone()}</strong>
                    {format!(" by {} on {} ({}, {})", post.author, post.date, post.difficulty, post.time)}
                </li>
            })}
        </ul>
    }
}

#[function_component(Standings)]
fn standings() -> Html {
    let entries = use_leaderboard();

    html! {
        <ol class="hunt-leaderboard">
            {for entries.iter().map(|entry| html! {
                <li key={entry.id}>{format!("{}: {}", entry.name, entry.score)}</li>
            })}
        </ol>
    }
}

#[function_component(Podium)]
fn podium() -> Html {
    let top = use_top_entries(3);

    html! {
        <div class="hunt-podium">
            {for top.iter().zip(1..).map(|(entry, place)| html! {
                <span key={entry.id}>{format!("#{} {} ", place, entry.name)}</span>
            })}
        </div>
    }
}

#[function_component(ScoreBumper)]
fn score_bumper() -> Html {
    let store = use_store();

    let on_bump = {
        let store = store.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(last) = store.snapshot.leaderboard.last() {
                (store.send_command)(StoreCommand::SetScore {
                    id: last.id,
                    score: last.score + 10,
                });
            }
        })
    };

    let on_add = {
        let store = store.clone();
        Callback::from(move |_: MouseEvent| {
            (store.send_command)(StoreCommand::AddEntry {
                draft: EntryDraft::parse("New Team", "0"),
            });
        })
    };

    let status = match &store.last_event {
        Some(StoreEvent::Ignored { reason, .. }) | Some(StoreEvent::CommandFailed { reason, .. }) => {
            reason.clone()
        }
        _ => String::new(),
    };

    html! {
        <div class="hunt-admin">
            <button onclick={on_add}>{"Add team"}</button>
            <button onclick={on_bump}>{"+10 for last place"}</button>
            <span class="hunt-admin__status">{status}</span>
            {if !store.persistent {
                html! { <p>{"localStorage unavailable; changes are lost on reload"}</p> }
            } else {
                html! {}
            }}
        </div>
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <StoreProvider>
            <AuthProvider>
                <Feed />
                <Podium />
                <Standings />
                <AdminLogin />
                <AdminOnly fallback={html! { <p>{"Log in to edit."}</p> }}>
                    <ScoreBumper />
                </AdminOnly>
            </AuthProvider>
        </StoreProvider>
    }
}

fn main() {
    init_tracing();

    tracing::info!("Starting scavenger hunt admin console");

    yew::Renderer::<App>::new().render();
}
