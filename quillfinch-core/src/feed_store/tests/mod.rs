/*
    Integration tests for the feed_store subsystem

    Test suite covering:
    - Auth flows across register/login/update
    - Post lifecycle and pure reads
    - Snapshot persistence and rehydration
    - Cross-store controller scenarios (dispatch, share, admin delete)
    - Property tests for the toggle involutions and hashtag rules
*/

pub mod property_tests;
pub mod scenario_tests;
