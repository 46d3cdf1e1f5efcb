// services/sample_data.rs
//! Start-up seeding of demo and load-test records.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use chrono::{DateTime, Duration, SubsecRound, TimeZone, Utc};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::config::{AppConfig, SampleDataMode};
use crate::errors::Result;
use crate::models::football::{Competition, MatchStatus, Team};
use crate::models::potm::PotmStatus;
use crate::models::prediction::{GameStatus, PredictionOutcome};
use crate::models::{GameInstance, Match, PlayerOfTheMatch, Quiz, Searchable};
use crate::services::elastic::{BulkOperation, EngineClient};

pub const PERFORMANCE_LARGE_RECORDS: usize = 250_000;
pub const BULK_BATCH_SIZE: usize = 1_000;

const MATCH_ID_BASE: i64 = 1_000_000;
const PREDICTION_ID_BASE: i64 = 2_000_000;
const QUIZ_ID_BASE: i64 = 3_000_000;
const PLAYER_GAME_ID_BASE: i64 = 4_000_000;

const TEAM_NAMES: [&str; 20] = [
    "Barcelona",
    "Real Madrid",
    "Manchester United",
    "Liverpool",
    "Bayern Munich",
    "Borussia Dortmund",
    "PSG",
    "Manchester City",
    "Arsenal",
    "Chelsea",
    "Juventus",
    "AC Milan",
    "Inter Milan",
    "Atletico Madrid",
    "Valencia",
    "Sevilla",
    "Napoli",
    "Roma",
    "Lazio",
    "Atalanta",
];
const VENUES: [&str; 10] = [
    "Camp Nou",
    "Santiago Bernabeu",
    "Old Trafford",
    "Anfield",
    "Allianz Arena",
    "Signal Iduna Park",
    "Parc des Princes",
    "Etihad Stadium",
    "Emirates Stadium",
    "Stamford Bridge",
];
const COMPETITIONS: [&str; 6] = [
    "La Liga",
    "Premier League",
    "Bundesliga",
    "Ligue 1",
    "Serie A",
    "Champions League",
];
const REFEREES: [&str; 5] = [
    "Carlos del Cerro Grande",
    "Michael Oliver",
    "Felix Brych",
    "Daniele Orsato",
    "Clement Turpin",
];
const QUIZ_TITLES: [&str; 14] = [
    "Football Trivia",
    "Premier League Quiz",
    "Champions League Facts",
    "World Cup History",
    "La Liga Knowledge",
    "Bundesliga Quiz",
    "Serie A Test",
    "Ligue 1 Facts",
    "European Football",
    "International Football",
    "Club History",
    "Player Stats",
    "Manager Quiz",
    "Stadium Facts",
];
const QUIZ_CATEGORIES: [&str; 5] = ["Sports", "Football", "History", "Statistics", "Trivia"];
const QUIZ_CREATORS: [&str; 5] = ["admin", "quiz_master", "football_expert", "trivia_king", "sports_guru"];
const PLAYERS: [&str; 15] = [
    "Lionel Messi",
    "Cristiano Ronaldo",
    "Kylian Mbappe",
    "Erling Haaland",
    "Neymar Jr",
    "Kevin De Bruyne",
    "Mohamed Salah",
    "Robert Lewandowski",
    "Karim Benzema",
    "Luka Modric",
    "Virgil van Dijk",
    "Sadio Mane",
    "Bruno Fernandes",
    "Harry Kane",
    "Son Heung-min",
];

/// Current time at millisecond precision, the resolution match timestamps are stored at.
fn seed_clock() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

const OUTCOMES: [PredictionOutcome; 3] = [
    PredictionOutcome::HomeWin,
    PredictionOutcome::AwayWin,
    PredictionOutcome::Draw,
];

/// Runs the configured seeding once, after the start-up delay.
///
/// Failures are logged and swallowed; the server keeps serving either way.
pub fn spawn(engine: Arc<EngineClient>, config: &AppConfig) -> JoinHandle<()> {
    let mode = config.sample_data_mode;
    let records_per_type = config.sample_data_records_per_type;
    let delay = config.sample_data_delay;

    tokio::spawn(async move {
        info!("🌱 Sample data mode: {}", mode);
        if mode == SampleDataMode::None {
            info!("Sample data loading is disabled");
            return;
        }

        tokio::time::sleep(delay).await;

        let loader = SampleDataLoader::new(engine);
        match loader.load(mode, records_per_type).await {
            Ok(()) => info!("✅ Sample data initialization completed"),
            Err(e) => {
                warn!("⚠️ Failed to initialize sample data: {:#}", e);
                info!("Application will continue without sample data");
            }
        }
    })
}

pub struct SampleDataLoader {
    engine: Arc<EngineClient>,
}

impl SampleDataLoader {
    pub fn new(engine: Arc<EngineClient>) -> Self {
        SampleDataLoader { engine }
    }

    pub async fn load(&self, mode: SampleDataMode, records_per_type: usize) -> anyhow::Result<()> {
        match mode {
            SampleDataMode::None => Ok(()),
            SampleDataMode::Basic => {
                info!("Loading basic sample data...");
                self.load_basic().await
            }
            SampleDataMode::PerformanceSmall => {
                info!("Loading performance test data (small)...");
                self.load_performance(records_per_type.max(1)).await
            }
            SampleDataMode::PerformanceLarge => {
                info!("Loading performance test data (large)...");
                self.load_performance(PERFORMANCE_LARGE_RECORDS).await
            }
        }
    }

    pub async fn load_basic(&self) -> anyhow::Result<()> {
        let now = seed_clock();
        self.index_each(basic_matches(now)).await.context("indexing sample matches")?;
        self.index_each(basic_predictions(now))
            .await
            .context("indexing sample predictions")?;
        self.index_each(basic_quizzes(now)).await.context("indexing sample quiz games")?;
        self.index_each(basic_player_games(now))
            .await
            .context("indexing sample player games")?;
        Ok(())
    }

    pub async fn load_performance(&self, records_per_type: usize) -> anyhow::Result<()> {
        info!(
            "Generating performance data with {} records per type...",
            records_per_type
        );
        let now = seed_clock();

        let mut rejected = self
            .bulk_insert(records_per_type, |i| generated_match(i, now))
            .await
            .context("bulk inserting matches")?;
        rejected += self
            .bulk_insert(records_per_type, generated_prediction)
            .await
            .context("bulk inserting predictions")?;
        rejected += self
            .bulk_insert(records_per_type, generated_quiz)
            .await
            .context("bulk inserting quiz games")?;
        rejected += self
            .bulk_insert(records_per_type, generated_player_game)
            .await
            .context("bulk inserting player games")?;

        info!("Refreshing Elasticsearch indices...");
        self.engine.refresh().await.context("refreshing indices")?;
        if rejected > 0 {
            warn!(
                "⚠️ Performance data generation completed with {} rejected item(s)",
                rejected
            );
        } else {
            info!("✅ Performance data generation completed");
        }
        Ok(())
    }

    /// Upserts records one at a time under their own ids.
    async fn index_each<T: Searchable>(&self, records: Vec<T>) -> Result<()> {
        let index = T::KIND.index();
        for record in records {
            let id = record.id().map(|id| id.to_string()).unwrap_or_default();
            self.engine
                .index_document(index, &id, &record.into_wrapper())
                .await?;
            debug!("   → Indexed document in {} with id: {}", index, id);
        }
        Ok(())
    }

    /// Sends records through `_bulk` in fixed-size batches and returns how many items the engine rejected.
    async fn bulk_insert<T, F>(&self, count: usize, build: F) -> Result<usize>
    where
        T: Searchable,
        F: Fn(usize) -> T,
    {
        let index = T::KIND.index();
        let start_time = Instant::now();
        info!("📦 Inserting {} {} records...", count, T::KIND);

        let mut rejected = 0;
        let mut batch = Vec::with_capacity(BULK_BATCH_SIZE.min(count));
        for i in 0..count {
            let record = build(i);
            let id = record.id().map(|id| id.to_string()).unwrap_or_default();
            batch.push(BulkOperation::index(index, id, &record.into_wrapper())?);

            if batch.len() == BULK_BATCH_SIZE || i + 1 == count {
                rejected += self.engine.bulk(&batch).await?.failed_items();
                batch.clear();

                if (i + 1) % 10_000 == 0 {
                    info!("   → Processed {}/{} {}...", i + 1, count, T::KIND);
                }
            }
        }

        if rejected > 0 {
            warn!(
                "⚠️ {} inserted in {:?} with {} of {} item(s) rejected",
                T::KIND,
                start_time.elapsed(),
                rejected,
                count
            );
        } else {
            info!("✅ {} inserted in {:?}", T::KIND, start_time.elapsed());
        }
        Ok(rejected)
    }
}

fn basic_matches(now: DateTime<Utc>) -> Vec<Match> {
    let yesterday = now - Duration::days(1);
    let two_days_ago = now - Duration::days(2);
    let tomorrow = now + Duration::days(1);

    vec![
        Match {
            id: Some(1000),
            kickoff_at: Some(yesterday),
            finished_at: Some(yesterday),
            updated_at: Some(now),
            status: Some(MatchStatus::finished()),
            home_team: Some(Team::named("fb:t:2000", "Barcelona", "Barca")),
            away_team: Some(Team::named("fb:t:2001", "Real Madrid", "Real")),
            competition: Some(Competition::named("fb:c:3000", "La Liga")),
            goals_full_time_home: Some(2),
            goals_full_time_away: Some(1),
            goals_half_time_home: Some(1),
            goals_half_time_away: Some(0),
            venue: Some("Camp Nou".to_string()),
            referee: Some("Carlos del Cerro Grande".to_string()),
            lineups_confirmed: Some(true),
            started_at: Some(yesterday),
            minute: Some("90+3".to_string()),
            is_deleted: Some(false),
            undecided: Some(false),
        },
        Match {
            id: Some(1001),
            kickoff_at: Some(two_days_ago),
            finished_at: Some(two_days_ago),
            updated_at: Some(now),
            status: Some(MatchStatus::finished()),
            home_team: Some(Team::named("fb:t:2002", "Manchester United", "Man Utd")),
            away_team: Some(Team::named("fb:t:2003", "Liverpool", "Liverpool")),
            competition: Some(Competition::named("fb:c:3001", "Premier League")),
            goals_full_time_home: Some(1),
            goals_full_time_away: Some(3),
            goals_half_time_home: Some(0),
            goals_half_time_away: Some(2),
            venue: Some("Old Trafford".to_string()),
            referee: Some("Michael Oliver".to_string()),
            lineups_confirmed: Some(true),
            started_at: Some(two_days_ago),
            minute: Some("90+5".to_string()),
            is_deleted: Some(false),
            undecided: Some(false),
        },
        Match {
            id: Some(1002),
            kickoff_at: Some(tomorrow),
            updated_at: Some(now),
            status: Some(MatchStatus::scheduled()),
            home_team: Some(Team::named("fb:t:2004", "Bayern Munich", "Bayern")),
            away_team: Some(Team::named("fb:t:2005", "Borussia Dortmund", "BVB")),
            competition: Some(Competition::named("fb:c:3002", "Bundesliga")),
            venue: Some("Allianz Arena".to_string()),
            referee: Some("Felix Brych".to_string()),
            lineups_confirmed: Some(false),
            is_deleted: Some(false),
            undecided: Some(false),
            ..Default::default()
        },
    ]
}

fn basic_predictions(now: DateTime<Utc>) -> Vec<GameInstance> {
    let entries = [
        ("user1", 2, 1, PredictionOutcome::HomeWin, Duration::hours(2), 85, Some(true)),
        ("user2", 0, 2, PredictionOutcome::AwayWin, Duration::hours(3), 70, Some(false)),
        ("user1", 3, 1, PredictionOutcome::HomeWin, Duration::minutes(30), 90, None),
    ];

    entries
        .into_iter()
        .zip(0i64..)
        .map(|((user, home, away, outcome, age, confidence, is_correct), n)| GameInstance {
            id: Some(4000 + n),
            match_id: Some(1000 + n),
            user_id: Some(user.to_string()),
            predicted_home_score: Some(home),
            predicted_away_score: Some(away),
            predicted_outcome: Some(outcome),
            prediction_time: Some(now - age),
            confidence: Some(confidence),
            is_correct,
            status: Some(GameStatus::Open),
            ..Default::default()
        })
        .collect()
}

fn basic_quizzes(now: DateTime<Utc>) -> Vec<Quiz> {
    vec![
        Quiz {
            id: Some(5000),
            title: Some("Football Trivia".to_string()),
            description: Some("Test your football knowledge".to_string()),
            questions: Some(vec![
                "Who won the 2022 World Cup?".to_string(),
                "Which team has won the most Champions League titles?".to_string(),
            ]),
            correct_answers: Some(vec!["Argentina".to_string(), "Real Madrid".to_string()]),
            category: Some("Sports".to_string()),
            difficulty: Some(3),
            time_limit: Some(300),
            created_at: Some(now - Duration::days(1)),
            created_by: Some("admin".to_string()),
            is_active: Some(true),
            ..Default::default()
        },
        Quiz {
            id: Some(5001),
            title: Some("Premier League Quiz".to_string()),
            description: Some("All about English football".to_string()),
            questions: Some(vec![
                "Which team won the first Premier League title?".to_string(),
                "Who is the top scorer in Premier League history?".to_string(),
            ]),
            correct_answers: Some(vec![
                "Manchester United".to_string(),
                "Alan Shearer".to_string(),
            ]),
            category: Some("Sports".to_string()),
            difficulty: Some(4),
            time_limit: Some(600),
            created_at: Some(now - Duration::days(2)),
            created_by: Some("admin".to_string()),
            is_active: Some(true),
            ..Default::default()
        },
    ]
}

fn basic_player_games(now: DateTime<Utc>) -> Vec<PlayerOfTheMatch> {
    vec![
        PlayerOfTheMatch {
            id: Some(6000),
            match_id: Some(1000),
            game_title: Some("El Clasico Player of the Match".to_string()),
            player_options: Some(strings(&["Lionel Messi", "Karim Benzema", "Pedri", "Vinicius Jr."])),
            correct_player: Some("Lionel Messi".to_string()),
            user_id: Some("user1".to_string()),
            selected_player: Some("Lionel Messi".to_string()),
            points: Some(10),
            submission_time: Some(now - Duration::hours(1)),
            is_correct: Some(true),
            game_status: Some(PotmStatus::Completed),
            votes: Some(tally(&[
                ("Lionel Messi", 150),
                ("Karim Benzema", 75),
                ("Pedri", 45),
                ("Vinicius Jr.", 30),
            ])),
        },
        PlayerOfTheMatch {
            id: Some(6001),
            match_id: Some(1001),
            game_title: Some("Premier League POTM".to_string()),
            player_options: Some(strings(&[
                "Mohamed Salah",
                "Bruno Fernandes",
                "Virgil van Dijk",
                "Marcus Rashford",
            ])),
            correct_player: Some("Mohamed Salah".to_string()),
            user_id: Some("user2".to_string()),
            selected_player: Some("Bruno Fernandes".to_string()),
            points: Some(0),
            submission_time: Some(now - Duration::hours(2)),
            is_correct: Some(false),
            game_status: Some(PotmStatus::Completed),
            votes: Some(tally(&[
                ("Mohamed Salah", 200),
                ("Bruno Fernandes", 120),
                ("Virgil van Dijk", 80),
                ("Marcus Rashford", 60),
            ])),
        },
    ]
}

fn generated_match(i: usize, now: DateTime<Utc>) -> Match {
    let home = i % TEAM_NAMES.len();
    let away = (i + 1) % TEAM_NAMES.len();
    let competition = i % COMPETITIONS.len();
    // Three in four matches are finished; kickoffs spread over the past week.
    let finished = i % 4 != 3;
    let kickoff = now - Duration::days((i % 7) as i64);
    let goals = |n: usize| finished.then_some(n as i32);

    Match {
        id: Some(MATCH_ID_BASE + i as i64),
        kickoff_at: Some(kickoff),
        finished_at: finished.then(|| kickoff + Duration::minutes(90)),
        updated_at: Some(now),
        status: Some(if finished {
            MatchStatus::finished()
        } else {
            MatchStatus::scheduled()
        }),
        home_team: Some(generated_team(home)),
        away_team: Some(generated_team(away)),
        competition: Some(Competition::named(
            format!("fb:c:{}", competition),
            COMPETITIONS[competition],
        )),
        goals_full_time_home: goals(i % 5),
        goals_full_time_away: goals((i + 1) % 5),
        goals_half_time_home: goals(i % 3),
        goals_half_time_away: goals((i + 1) % 3),
        venue: Some(VENUES[i % VENUES.len()].to_string()),
        referee: Some(REFEREES[i % REFEREES.len()].to_string()),
        lineups_confirmed: Some(finished),
        started_at: finished.then_some(kickoff),
        minute: finished.then(|| "90".to_string()),
        is_deleted: Some(false),
        undecided: Some(false),
    }
}

fn generated_team(slot: usize) -> Team {
    let name = TEAM_NAMES[slot];
    let short_name = name.split(' ').next().unwrap_or(name);
    Team::named(format!("fb:t:{}", slot), name, short_name)
}

fn generated_prediction(i: usize) -> GameInstance {
    GameInstance {
        id: Some(PREDICTION_ID_BASE + i as i64),
        match_id: Some(MATCH_ID_BASE + i as i64),
        user_id: Some(format!("user{}", i % 10 + 1)),
        predicted_home_score: Some((i % 4) as i32),
        predicted_away_score: Some(((i + 1) % 4) as i32),
        predicted_outcome: Some(OUTCOMES[i % OUTCOMES.len()]),
        prediction_time: Utc.with_ymd_and_hms(2024, 1, 15, 19, 0, 0).single(),
        confidence: Some(50 + (i % 50) as i32),
        is_correct: Some(i % 2 == 0),
        ..Default::default()
    }
}

fn generated_quiz(i: usize) -> Quiz {
    Quiz {
        id: Some(QUIZ_ID_BASE + i as i64),
        title: Some(format!("{} {}", QUIZ_TITLES[i % QUIZ_TITLES.len()], i + 1)),
        description: Some("Test your football knowledge with this quiz".to_string()),
        questions: Some(strings(&["Question 1?", "Question 2?"])),
        correct_answers: Some(strings(&["Answer 1", "Answer 2"])),
        category: Some(QUIZ_CATEGORIES[i % QUIZ_CATEGORIES.len()].to_string()),
        difficulty: Some(1 + (i % 5) as i32),
        time_limit: Some(300 + (i % 300) as i32),
        created_at: Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).single(),
        created_by: Some(QUIZ_CREATORS[i % QUIZ_CREATORS.len()].to_string()),
        is_active: Some(true),
        ..Default::default()
    }
}

fn generated_player_game(i: usize) -> PlayerOfTheMatch {
    let options = (0..4)
        .map(|offset| PLAYERS[(i + offset) % PLAYERS.len()].to_string())
        .collect();

    PlayerOfTheMatch {
        id: Some(PLAYER_GAME_ID_BASE + i as i64),
        match_id: Some(MATCH_ID_BASE + i as i64),
        game_title: Some(format!("Player of the Match Game {}", i + 1)),
        player_options: Some(options),
        points: Some((i % 20) as i32),
        game_status: Some(PotmStatus::Active),
        votes: Some(BTreeMap::new()),
        ..Default::default()
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn tally(votes: &[(&str, i32)]) -> BTreeMap<String, i32> {
    votes.iter().map(|(player, n)| (player.to_string(), *n)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SearchWrapper;

    #[test]
    fn basic_set_has_fixed_counts_and_ids() {
        let now = Utc::now();
        let match_ids: Vec<_> = basic_matches(now).iter().map(|m| m.id).collect();
        assert_eq!(match_ids, vec![Some(1000), Some(1001), Some(1002)]);

        let prediction_ids: Vec<_> = basic_predictions(now).iter().map(|p| p.id).collect();
        assert_eq!(prediction_ids, vec![Some(4000), Some(4001), Some(4002)]);

        assert_eq!(basic_quizzes(now).len(), 2);
        assert_eq!(basic_quizzes(now)[1].id, Some(5001));
        assert_eq!(basic_player_games(now).len(), 2);
        assert_eq!(basic_player_games(now)[0].id, Some(6000));
    }

    #[test]
    fn basic_games_reference_seeded_matches() {
        let now = Utc::now();
        let match_ids: Vec<_> = basic_matches(now).into_iter().filter_map(|m| m.id).collect();

        for prediction in basic_predictions(now) {
            assert!(match_ids.contains(&prediction.match_id.unwrap()));
        }
        for game in basic_player_games(now) {
            assert!(match_ids.contains(&game.match_id.unwrap()));
        }
    }

    #[test]
    fn clasico_wrapper_is_searchable_by_team_names() {
        let clasico = basic_matches(Utc::now()).remove(0).into_wrapper();
        assert_eq!(clasico.search_title.as_deref(), Some("Barcelona vs Real Madrid"));
        assert_eq!(
            clasico.search_description.as_deref(),
            Some("Football match at Camp Nou")
        );
        assert_eq!(
            clasico.entity_ids,
            vec!["1000", "fb:t:2000", "fb:t:2001", "fb:c:3000"]
        );
    }

    #[test]
    fn generated_ids_start_at_type_offsets() {
        let now = Utc::now();
        assert_eq!(generated_match(0, now).id, Some(1_000_000));
        assert_eq!(generated_prediction(5).id, Some(2_000_005));
        assert_eq!(generated_quiz(0).id, Some(3_000_000));
        assert_eq!(generated_player_game(42).id, Some(4_000_042));
    }

    #[test]
    fn every_fourth_generated_match_is_scheduled() {
        let now = Utc::now();
        let scheduled = generated_match(3, now);
        assert_eq!(scheduled.status, Some(MatchStatus::scheduled()));
        assert!(scheduled.finished_at.is_none());
        assert!(scheduled.goals_full_time_home.is_none());

        let finished = generated_match(4, now);
        assert_eq!(finished.status, Some(MatchStatus::finished()));
        assert_eq!(finished.minute.as_deref(), Some("90"));
        assert_eq!(
            finished.home_team.and_then(|t| t.short_name).as_deref(),
            Some("Bayern")
        );
    }

    #[test]
    fn generated_quiz_titles_are_numbered() {
        assert_eq!(generated_quiz(0).title.as_deref(), Some("Football Trivia 1"));
        assert_eq!(generated_quiz(14).title.as_deref(), Some("Football Trivia 15"));
        assert_eq!(generated_quiz(1).category.as_deref(), Some("Football"));
    }

    #[test]
    fn seeded_matches_survive_a_stored_round_trip() {
        let now = seed_clock();
        let mut seeded = basic_matches(now);
        seeded.push(generated_match(4, now));

        for original in seeded {
            let stored = serde_json::to_value(original.clone().into_wrapper()).unwrap();
            let loaded: SearchWrapper<Match> = serde_json::from_value(stored).unwrap();
            assert_eq!(loaded.into_data(), original);
        }
    }

    #[tokio::test]
    async fn bulk_insert_reports_rejected_items() {
        let mut server = mockito::Server::new_async().await;
        let bulk = server
            .mock("POST", mockito::Matcher::Regex(r"^/_bulk".to_string()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                serde_json::json!({
                    "took": 4,
                    "errors": true,
                    "items": [
                        { "index": { "_index": "quiz_games", "_id": "3000000", "status": 201 } },
                        { "index": { "_index": "quiz_games", "_id": "3000001", "status": 400,
                            "error": { "type": "mapper_parsing_exception", "reason": "bad field" } } },
                        { "index": { "_index": "quiz_games", "_id": "3000002", "status": 429,
                            "error": { "type": "es_rejected_execution_exception", "reason": "queue full" } } }
                    ]
                })
                .to_string(),
            )
            .expect(1)
            .create_async()
            .await;

        let config = AppConfig {
            elasticsearch_url: server.url(),
            ..AppConfig::default()
        };
        let loader = SampleDataLoader::new(Arc::new(EngineClient::new(&config).unwrap()));

        let rejected = loader.bulk_insert(3, generated_quiz).await.unwrap();

        assert_eq!(rejected, 2);
        bulk.assert_async().await;
    }

    #[test]
    fn generated_player_games_offer_four_distinct_options() {
        let game = generated_player_game(13);
        let options = game.player_options.unwrap();
        assert_eq!(
            options,
            vec!["Harry Kane", "Son Heung-min", "Lionel Messi", "Cristiano Ronaldo"]
        );
    }
}
