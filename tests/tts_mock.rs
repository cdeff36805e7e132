//! Speech synthesis against a mock ElevenLabs server.

mod common;

use common::{MockServerFixture, TEST_KEY};
use elevenlabs_kit::{AudioFormat, Error, TtsOptions, VoiceSettings};
use mockito::Matcher;
use serde_json::json;

#[tokio::test]
async fn test_text_to_speech_defaults() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("POST", "/v1/text-to-speech/ZauUyVXAz5znrgRuElJ5")
        .match_header("xi-api-key", TEST_KEY)
        .match_query(Matcher::UrlEncoded(
            "output_format".into(),
            "mp3_44100_128".into(),
        ))
        .match_body(Matcher::Json(json!({
            "text": "One flat white, please.",
            "model_id": "eleven_multilingual_v2"
        })))
        .with_status(200)
        .with_header("content-type", "audio/mpeg")
        .with_body(b"ID3fake-mp3")
        .create_async()
        .await;

    let audio = fixture
        .client()
        .text_to_speech(
            "ZauUyVXAz5znrgRuElJ5",
            "One flat white, please.",
            &TtsOptions::default(),
        )
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(&audio.data[..], b"ID3fake-mp3");
    assert_eq!(audio.format, AudioFormat::Mp3);
    assert_eq!(audio.output_format, "mp3_44100_128");
}

#[tokio::test]
async fn test_text_to_speech_with_options() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("POST", "/v1/text-to-speech/voice-1")
        .match_query(Matcher::UrlEncoded("output_format".into(), "pcm_16000".into()))
        .match_body(Matcher::PartialJson(json!({
            "model_id": "eleven_turbo_v2_5",
            "voice_settings": {"stability": 0.25, "use_speaker_boost": true}
        })))
        .with_status(200)
        .with_body([0u8, 1, 2, 3])
        .create_async()
        .await;

    let options = TtsOptions::default()
        .with_model("eleven_turbo_v2_5")
        .with_output_format("pcm_16000")
        .with_voice_settings(VoiceSettings {
            stability: Some(0.25),
            use_speaker_boost: Some(true),
            ..Default::default()
        });
    let audio = fixture
        .client()
        .text_to_speech("voice-1", "Hello", &options)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(audio.format, AudioFormat::Pcm);
    assert_eq!(audio.data.len(), 4);
}

#[tokio::test]
async fn test_blank_input_rejected_locally() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let client = fixture.client();
    let err = client
        .text_to_speech("  ", "Hello", &TtsOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation { .. }));

    let err = client
        .text_to_speech("voice-1", "   ", &TtsOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation { .. }));

    mock.assert_async().await;
}

#[tokio::test]
async fn test_unknown_voice_propagates_remote_error() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_error(
            "POST",
            "/v1/text-to-speech/missing",
            404,
            r#"{"detail":{"status":"voice_not_found","message":"A voice with the voice_id missing was not found."}}"#,
        )
        .await;

    let err = fixture
        .client()
        .text_to_speech("missing", "Hello", &TtsOptions::default())
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert!(err.to_string().contains("was not found"));
}

#[tokio::test]
async fn test_voice_id_cannot_escape_its_path_segment() {
    let mut fixture = MockServerFixture::new().await;
    let other_endpoint = fixture
        .server
        .mock("POST", "/v1/models")
        .with_body("should not be reached")
        .expect(0)
        .create_async()
        .await;
    let any_post = fixture
        .server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let client = fixture.client();
    for voice_id in ["../models", "..", "a/b", "voice?x=1", "voice#frag"] {
        let err = client
            .text_to_speech(voice_id, "Hello", &TtsOptions::default())
            .await
            .unwrap_err();
        assert!(
            matches!(err, Error::Validation { .. }),
            "{voice_id:?} should be rejected, got {err:?}"
        );
        let err = client
            .text_to_speech_stream(voice_id, "Hello", &TtsOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
    }

    other_endpoint.assert_async().await;
    any_post.assert_async().await;
}

#[tokio::test]
async fn test_stream_yields_audio_chunks() {
    let mut fixture = MockServerFixture::new().await;
    let audio: Vec<u8> = (0..64 * 1024).map(|i| (i % 251) as u8).collect();
    let mock = fixture
        .server
        .mock("POST", "/v1/text-to-speech/voice-1/stream")
        .match_header("xi-api-key", TEST_KEY)
        .match_query(Matcher::UrlEncoded(
            "output_format".into(),
            "mp3_44100_128".into(),
        ))
        .match_body(Matcher::PartialJson(json!({
            "text": "Two espressos.",
            "model_id": "eleven_multilingual_v2"
        })))
        .with_status(200)
        .with_header("content-type", "audio/mpeg")
        .with_body(&audio)
        .create_async()
        .await;

    let stream = fixture
        .client()
        .text_to_speech_stream("voice-1", "Two espressos.", &TtsOptions::default())
        .await
        .unwrap();
    assert_eq!(stream.format, AudioFormat::Mp3);

    let clip = stream.collect().await.unwrap();
    mock.assert_async().await;
    assert_eq!(&clip.data[..], &audio[..]);
    assert_eq!(clip.output_format, "mp3_44100_128");
}

#[tokio::test]
async fn test_stream_writes_to_file() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .server
        .mock("POST", "/v1/text-to-speech/voice-1/stream")
        .with_status(200)
        .with_body(b"ID3streamed")
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("order.mp3");
    let written = fixture
        .client()
        .text_to_speech_stream("voice-1", "Hello", &TtsOptions::default())
        .await
        .unwrap()
        .write_to(&path)
        .await
        .unwrap();

    assert_eq!(written, 11);
    assert_eq!(std::fs::read(&path).unwrap(), b"ID3streamed");
}

#[tokio::test]
async fn test_stream_write_to_missing_directory_is_io_error() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .server
        .mock("POST", "/v1/text-to-speech/voice-1/stream")
        .with_status(200)
        .with_body(b"ID3")
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let err = fixture
        .client()
        .text_to_speech_stream("voice-1", "Hello", &TtsOptions::default())
        .await
        .unwrap()
        .write_to(dir.path().join("missing").join("out.mp3"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[tokio::test]
async fn test_stream_rejection_fails_before_chunks() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_error(
            "POST",
            "/v1/text-to-speech/voice-1/stream",
            401,
            r#"{"detail":{"status":"invalid_api_key","message":"Invalid API key"}}"#,
        )
        .await;

    let err = fixture
        .client()
        .text_to_speech_stream("voice-1", "Hello", &TtsOptions::default())
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(401));
    assert!(err.is_external_service());
}
