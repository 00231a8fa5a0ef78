use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;

use business::domain::auth::value_objects::PlatformContext;
use business::domain::logger::Logger;
use gms::sdk::mlkit::{
    InputImage, MlKitDetectedObject, MlKitException, MlKitObjectDetector, ObjectDetection,
    ObjectDetectorOptions,
};
use gms::sdk::sign_in::{GoogleSignIn, GoogleSignInClient, GoogleSignInOptions};
use hms::sdk::account::{AccountAuthManager, AccountAuthParams, AccountAuthService};
use hms::sdk::ml::{MlAnalyzerFactory, MlException, MlObjectAnalyzer, MlObjectAnalyzerSetting};

use crate::setup::bindings::VendorBindings;

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

mock! {
    pub GoogleSdk {}

    impl GoogleSignIn for GoogleSdk {
        fn client(
            &self,
            context: &PlatformContext,
            options: GoogleSignInOptions,
        ) -> Arc<dyn GoogleSignInClient>;
    }
}

mock! {
    pub MlKitDetector {}

    #[async_trait]
    impl MlKitObjectDetector for MlKitDetector {
        async fn process(
            &self,
            image: InputImage,
        ) -> Result<Vec<MlKitDetectedObject>, MlKitException>;
        fn close(&self) -> Result<(), MlKitException>;
    }
}

mock! {
    pub MlKitSdk {}

    impl ObjectDetection for MlKitSdk {
        fn client(
            &self,
            options: ObjectDetectorOptions,
        ) -> Result<Arc<dyn MlKitObjectDetector>, MlKitException>;
    }
}

mock! {
    pub HuaweiAccount {}

    impl AccountAuthManager for HuaweiAccount {
        fn service(
            &self,
            context: &PlatformContext,
            params: AccountAuthParams,
        ) -> Arc<dyn AccountAuthService>;
    }
}

mock! {
    pub HuaweiMl {}

    impl MlAnalyzerFactory for HuaweiMl {
        fn local_object_analyzer(
            &self,
            setting: MlObjectAnalyzerSetting,
        ) -> Result<Arc<dyn MlObjectAnalyzer>, MlException>;
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

/// ML Kit binding whose detectors accept every close call.
pub fn working_mlkit() -> MockMlKitSdk {
    let mut sdk = MockMlKitSdk::new();
    sdk.expect_client().returning(|_| {
        let mut detector = MockMlKitDetector::new();
        detector.expect_close().returning(|| Ok(()));
        detector.expect_process().returning(|_| Ok(Vec::new()));
        Ok(Arc::new(detector) as Arc<dyn MlKitObjectDetector>)
    });
    sdk
}

/// Both vendors bound; adapter construction never calls into these SDKs.
pub fn full_bindings() -> VendorBindings {
    VendorBindings::default()
        .with_google(Arc::new(MockGoogleSdk::new()), Arc::new(working_mlkit()))
        .with_huawei(Arc::new(MockHuaweiAccount::new()), Arc::new(MockHuaweiMl::new()))
}
