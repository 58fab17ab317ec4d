use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use transcription_application::{
    ApplicationError, DispatchStage, ProviderRegistry, TranscribeAudioRequest, TranscribeUseCase,
    TranscribeUseCaseImpl,
};
use transcription_domain::raw::{
    RawSegment, RawTranscriptionInfo, WhisperOutput, WhisperTurboOutput,
};
use transcription_domain::{
    ContentType, DomainError, ProviderRequest, RawProviderResult, ResponseFormat,
    TranscriptionModel, TranscriptionProvider,
};

struct MockProvider {
    model: TranscriptionModel,
    result: Result<RawProviderResult, DomainError>,
    calls: AtomicUsize,
    last_request: Mutex<Option<ProviderRequest>>,
}

impl MockProvider {
    fn new(model: TranscriptionModel, result: Result<RawProviderResult, DomainError>) -> Arc<Self> {
        Arc::new(Self {
            model,
            result,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        })
    }
}

#[async_trait]
impl TranscriptionProvider for MockProvider {
    fn model(&self) -> TranscriptionModel {
        self.model
    }

    async fn invoke(&self, request: ProviderRequest) -> Result<RawProviderResult, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().expect("lock") = Some(request);
        self.result.clone()
    }
}

fn whisper_hello() -> RawProviderResult {
    RawProviderResult::Whisper(WhisperOutput {
        text: "hello".to_string(),
        ..Default::default()
    })
}

fn turbo_result() -> RawProviderResult {
    RawProviderResult::WhisperTurbo(WhisperTurboOutput {
        text: "hello world".to_string(),
        transcription_info: Some(RawTranscriptionInfo {
            language: Some("en".to_string()),
            duration: Some(4.2),
            ..Default::default()
        }),
        segments: Some(vec![RawSegment {
            start: Some(0.0),
            end: Some(4.2),
            text: Some("hello world".to_string()),
            temperature: Some(0.0),
            avg_logprob: Some(-0.2),
            compression_ratio: Some(1.0),
            no_speech_prob: Some(0.01),
            words: None,
        }]),
        ..Default::default()
    })
}

fn usecase_with(provider: Arc<MockProvider>) -> TranscribeUseCaseImpl {
    TranscribeUseCaseImpl::new(Arc::new(ProviderRegistry::new().register(provider)))
}

fn request(model: TranscriptionModel, format: &str) -> TranscribeAudioRequest {
    TranscribeAudioRequest {
        file: vec![0, 1, 2, 3],
        model: model.as_str().to_string(),
        response_format: Some(format.to_string()),
        ..Default::default()
    }
}

#[tokio::test]
async fn text_format_returns_raw_provider_text() {
    let provider = MockProvider::new(TranscriptionModel::Whisper, Ok(whisper_hello()));
    let usecase = usecase_with(provider.clone());

    let response = usecase
        .transcribe(request(TranscriptionModel::Whisper, "text"))
        .await
        .expect("transcription succeeds");

    assert_eq!(response.body, "hello");
    assert_eq!(response.content_type, ContentType::PlainText);
    assert_eq!(response.response_format, ResponseFormat::Text);
    assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn srt_is_rejected_before_the_provider_is_called() {
    let provider = MockProvider::new(
        TranscriptionModel::WhisperLargeV3Turbo,
        Ok(turbo_result()),
    );
    let usecase = usecase_with(provider.clone());

    let err = usecase
        .transcribe(request(TranscriptionModel::WhisperLargeV3Turbo, "srt"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ApplicationError::Stage {
            stage: DispatchStage::Dispatch,
            source: DomainError::UnsupportedFormat(ResponseFormat::Srt),
        }
    ));
    assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn verbose_json_on_metadata_less_models_is_rejected_before_the_provider() {
    for model in [TranscriptionModel::Whisper, TranscriptionModel::WhisperTinyEn] {
        let provider = MockProvider::new(model, Ok(whisper_hello()));
        let usecase = usecase_with(provider.clone());

        let err = usecase
            .transcribe(request(model, "verbose_json"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ApplicationError::Stage {
                stage: DispatchStage::Dispatch,
                source: DomainError::UnsupportedFormat(ResponseFormat::VerboseJson),
            }
        ));
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }
}

#[tokio::test]
async fn verbose_json_on_turbo_without_transcription_info_reports_missing_metadata() {
    let provider = MockProvider::new(
        TranscriptionModel::WhisperLargeV3Turbo,
        Ok(RawProviderResult::WhisperTurbo(WhisperTurboOutput {
            text: "hello".to_string(),
            ..Default::default()
        })),
    );
    let usecase = usecase_with(provider.clone());

    let err = usecase
        .transcribe(request(TranscriptionModel::WhisperLargeV3Turbo, "verbose_json"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ApplicationError::Stage {
            stage: DispatchStage::Render,
            source: DomainError::MissingTranscriptionMetadata,
        }
    ));
    assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn verbose_json_renders_requested_segments_only() {
    let provider = MockProvider::new(
        TranscriptionModel::WhisperLargeV3Turbo,
        Ok(turbo_result()),
    );
    let usecase = usecase_with(provider);
    let mut req = request(TranscriptionModel::WhisperLargeV3Turbo, "verbose_json");
    req.timestamp_granularities = Some(vec!["segment".to_string()]);

    let response = usecase.transcribe(req).await.expect("transcription succeeds");

    assert_eq!(response.content_type, ContentType::Json);
    assert!(response.body.contains("\"duration\":4.2"));
    assert!(response.body.contains("\"segments\":[{\"id\":0"));
    assert!(!response.body.contains("\"words\""));
}

#[tokio::test]
async fn provider_failure_is_tagged_with_provider_stage() {
    let provider = MockProvider::new(
        TranscriptionModel::Whisper,
        Err(DomainError::provider_unavailable(
            "@cf/openai/whisper",
            "timed out",
        )),
    );
    let usecase = usecase_with(provider);

    let err = usecase
        .transcribe(request(TranscriptionModel::Whisper, "json"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ApplicationError::Stage {
            stage: DispatchStage::Provider,
            source: DomainError::ProviderUnavailable { .. },
        }
    ));
}

#[tokio::test]
async fn conditioning_is_forwarded_only_to_models_that_accept_it() {
    let base = MockProvider::new(TranscriptionModel::Whisper, Ok(whisper_hello()));
    let turbo = MockProvider::new(
        TranscriptionModel::WhisperLargeV3Turbo,
        Ok(turbo_result()),
    );
    let usecase = TranscribeUseCaseImpl::new(Arc::new(
        ProviderRegistry::new()
            .register(base.clone())
            .register(turbo.clone()),
    ));

    for model in [TranscriptionModel::Whisper, TranscriptionModel::WhisperLargeV3Turbo] {
        let mut req = request(model, "json");
        req.language = Some("fr".to_string());
        req.prompt = Some("glossary".to_string());
        req.temperature = Some(0.4);
        usecase.transcribe(req).await.expect("transcription succeeds");
    }

    let base_request = base.last_request.lock().expect("lock").clone().expect("called");
    assert_eq!(base_request.language, None);
    assert_eq!(base_request.prompt, None);

    let turbo_request = turbo.last_request.lock().expect("lock").clone().expect("called");
    assert_eq!(turbo_request.language.as_deref(), Some("fr"));
    assert_eq!(turbo_request.prompt.as_deref(), Some("glossary"));
    assert_eq!(turbo_request.temperature, 0.4);
}

#[tokio::test]
async fn invalid_request_never_reaches_the_provider() {
    let provider = MockProvider::new(TranscriptionModel::Whisper, Ok(whisper_hello()));
    let usecase = usecase_with(provider.clone());
    let mut req = request(TranscriptionModel::Whisper, "json");
    req.temperature = Some(2.0);

    let err = usecase.transcribe(req).await.unwrap_err();

    assert!(matches!(err, ApplicationError::Validation(_)));
    assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn unregistered_model_is_reported_as_unavailable() {
    let provider = MockProvider::new(TranscriptionModel::Whisper, Ok(whisper_hello()));
    let usecase = usecase_with(provider);

    let err = usecase
        .transcribe(request(TranscriptionModel::WhisperTinyEn, "json"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ApplicationError::Stage {
            stage: DispatchStage::Dispatch,
            source: DomainError::ProviderUnavailable { .. },
        }
    ));
    assert_eq!(usecase.models(), vec![TranscriptionModel::Whisper]);
}
