mod image_codec_test;
mod inference_client_test;
mod report_prompts_test;
