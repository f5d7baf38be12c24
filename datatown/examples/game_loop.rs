//! One full seller session: sign in, take a sponsor survey, go shopping.
//!
//! Run with `cargo run --example game_loop`.

use std::rc::Rc;

use datatown::{
    CategoryFilter, CosmeticCategory, Inventory, MemoryAuth, MemoryStore, QuestionKind,
    SessionContext, SurveyRun, UserId, catalog, filter_by_category, purchase,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let auth = MemoryAuth::new();
    let store = MemoryStore::new();
    let session = SessionContext::start(&auth, Rc::new(store));

    let seller = UserId::new();
    auth.sign_in(seller);
    println!(
        "signed in as {seller}, questionnaire completed: {}",
        session.has_completed_questionnaire()
    );

    let mut inventory = Inventory::new(0);

    // Take every sponsor survey, picking the first option everywhere.
    for sponsor in catalog::sponsors() {
        let mut run = SurveyRun::new(sponsor.survey.clone())?;
        loop {
            let question = run.current_question().clone();
            match question.kind() {
                QuestionKind::ShortAnswer | QuestionKind::LongAnswer => {
                    run.answer_text("No comment")?;
                }
                QuestionKind::MultiChoice { options } => {
                    run.choose(options[0].clone())?;
                }
                QuestionKind::MultiSelect { options } => {
                    run.toggle(options[0].clone())?;
                }
            }
            if run.next().is_err() {
                break;
            }
        }
        let reward = run.submit()?;
        inventory.credit(reward);
        println!("earned {reward} coins from {}", sponsor.company.name);
    }

    // Spend them on a hat.
    let hats = filter_by_category(
        catalog::shop_items(),
        CategoryFilter::Only(CosmeticCategory::Hat),
    );
    let affordable = hats.iter().find(|h| h.cost <= inventory.coins());
    match affordable {
        Some(hat) => {
            purchase(&mut inventory, hat)?;
            println!("bought {} for {} coins", hat.name, hat.cost);
        }
        None => println!("no hat within budget yet"),
    }
    println!(
        "balance: {} coins, hat slot: {:?}",
        inventory.coins(),
        inventory.equipped(CosmeticCategory::Hat)
    );

    Ok(())
}
