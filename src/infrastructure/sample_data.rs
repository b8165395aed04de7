// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::corpus::store::CorpusStore;
use crate::domain::models::article::Article;
use crate::domain::models::entity::{Entity, EntityType};
use chrono::NaiveDate;
use uuid::Uuid;

// The seed corpus: five wartime articles from 1941-42 plus the entities
// mentioned in them. Ids are generated fresh on every load; lookups go
// through the listing endpoints, never hardcoded ids.

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn article(
    title: &str,
    content: &str,
    category: &str,
    publication_date: NaiveDate,
    source: &str,
    quality_score: f64,
    word_count: u32,
) -> Article {
    Article {
        id: Uuid::new_v4().to_string(),
        title: title.to_string(),
        content: content.to_string(),
        category: category.to_string(),
        publication_date,
        source: source.to_string(),
        is_advertisement: false,
        quality_score,
        word_count,
    }
}

fn entity(name: &str, entity_type: EntityType) -> Entity {
    Entity {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        entity_type,
    }
}

/// 构建示例语料库
///
/// 服务器启动时加载的固定文章与实体集合
pub fn sample_corpus() -> CorpusStore {
    let articles = vec![
        article(
            "Roosevelt Begins Third Term as War Looms",
            "President Franklin D. Roosevelt was inaugurated for an unprecedented third term \
             today, as war continues to rage in Europe and tensions with Japan increase in the \
             Pacific. In his address, Roosevelt emphasized the importance of American \
             preparedness while maintaining his commitment to keeping the nation out of foreign \
             conflicts.",
            "politics",
            date(1941, 1, 20),
            "The Daily Chronicle",
            0.92,
            1250,
        ),
        article(
            "Churchill and Roosevelt Meet Aboard Warships",
            "Prime Minister Winston Churchill and President Franklin D. Roosevelt concluded a \
             secret meeting aboard naval vessels in the Atlantic Ocean yesterday, issuing what \
             is being called the \"Atlantic Charter\" - a joint declaration of post-war aims \
             that emphasizes self-determination for all nations and economic cooperation.",
            "international",
            date(1941, 8, 14),
            "The Evening Star",
            0.89,
            950,
        ),
        article(
            "Roosevelt Declares War After Pearl Harbor Attack",
            "In an address to Congress that will surely echo through history, President \
             Roosevelt called December 7, 1941 \"a date which will live in infamy\" as he asked \
             for and received a declaration of war against the Empire of Japan following the \
             surprise attack on Pearl Harbor, Hawaii.",
            "war",
            date(1941, 12, 8),
            "The Morning Herald",
            0.95,
            1100,
        ),
        article(
            "Civil Rights Leaders Meet at White House",
            "A delegation of civil rights leaders including A. Philip Randolph and Walter White \
             met with President Roosevelt today to discuss racial discrimination in defense \
             industries. The meeting comes amid growing tensions and threats of a massive march \
             on Washington to protest segregation in the military and defense sectors.",
            "civil rights",
            date(1941, 6, 18),
            "The People's Voice",
            0.88,
            875,
        ),
        article(
            "Women Join Workforce as War Production Accelerates",
            "Factories across the nation are seeing an unprecedented influx of female workers \
             as war production ramps up and millions of men join the armed forces. \"Rosie the \
             Riveter\" has become a symbol of the American woman's contribution to the war \
             effort, with government campaigns actively encouraging women to take up industrial \
             jobs.",
            "society",
            date(1942, 7, 30),
            "Industrial Times",
            0.85,
            920,
        ),
    ];

    let entities = vec![
        entity("Franklin D. Roosevelt", EntityType::Person),
        entity("Winston Churchill", EntityType::Person),
        entity("Pearl Harbor", EntityType::Location),
        entity("World War II", EntityType::Event),
        entity("White House", EntityType::Location),
        entity("A. Philip Randolph", EntityType::Person),
        entity("Walter White", EntityType::Person),
        entity("Atlantic Charter", EntityType::Event),
    ];

    CorpusStore::new(articles, entities)
}
