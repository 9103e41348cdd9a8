/*
    Property tests for the pure parts of the feed model
*/

use crate::feed_store::model::{extract_hashtags, Post, PostId, Timestamp, UserId};
use crate::feed_store::store::{MemoryRepository, PostStore};
use crate::test_utils::TestPostBuilder;
use proptest::prelude::*;
use std::sync::Arc;

fn text_post(content: &str) -> Post {
    Post::from_draft(
        TestPostBuilder::new(content).build(),
        PostId::generate(),
        Timestamp::now(),
    )
}

proptest! {
    #[test]
    fn toggle_like_twice_is_identity(content in "[ -~]{0,60}", extra_likes in 0usize..5) {
        let mut post = text_post(&content);
        for _ in 0..extra_likes {
            post.toggle_like(&UserId::generate());
        }
        let before = post.likes.clone();

        let user = UserId::generate();
        post.toggle_like(&user);
        post.toggle_like(&user);

        prop_assert_eq!(post.likes, before);
    }

    #[test]
    fn toggle_save_twice_is_identity(content in "[ -~]{0,60}") {
        let mut post = text_post(&content);
        let user = UserId::generate();

        post.toggle_save(&user);
        post.toggle_save(&user);

        prop_assert!(post.saved_by.is_empty());
    }

    #[test]
    fn extracted_hashtags_are_well_formed(content in "[ -~#]{0,80}") {
        for tag in extract_hashtags(&content) {
            prop_assert!(tag.starts_with('#'));
            prop_assert!(tag.len() > 1);
            prop_assert!(tag[1..].chars().all(|c| c.is_ascii_alphanumeric() || c == '_'));
            prop_assert!(content.contains(&tag));
        }
    }

    #[test]
    fn hashtag_counts_sum_matches_occurrences(words in proptest::collection::vec("#[a-z]{1,8}", 0..10)) {
        let content = words.join(" ");
        let tags = extract_hashtags(&content);

        let mut store = PostStore::load(Arc::new(MemoryRepository::new())).unwrap();
        store.add_post(TestPostBuilder::new(&content).build()).unwrap();

        let counts = store.hashtag_counts();
        prop_assert_eq!(counts.values().sum::<usize>(), tags.len());
        for tag in &tags {
            prop_assert!(counts[tag] >= 1);
        }
    }

    #[test]
    fn search_is_case_insensitive_for_ascii(content in "[a-zA-Z ]{1,40}") {
        let mut store = PostStore::load(Arc::new(MemoryRepository::new())).unwrap();
        store.add_post(TestPostBuilder::new(&content).build()).unwrap();

        prop_assert_eq!(store.search(&content.to_ascii_uppercase()).len(), 1);
        prop_assert_eq!(store.search(&content.to_ascii_lowercase()).len(), 1);
    }

    #[test]
    fn search_preserves_feed_order(contents in proptest::collection::vec("[a-z]{1,12}", 1..6)) {
        let mut store = PostStore::load(Arc::new(MemoryRepository::new())).unwrap();
        for content in &contents {
            store
                .add_post(TestPostBuilder::new(&format!("shared {content}")).build())
                .unwrap();
        }

        let results = store.search("shared");
        prop_assert_eq!(results.len(), contents.len());
        let expected: Vec<String> = store.posts().iter().map(|p| p.content.clone()).collect();
        let got: Vec<String> = results.iter().map(|p| p.content.clone()).collect();
        prop_assert_eq!(got, expected);
    }
}
