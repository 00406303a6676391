mod ollama_cli_backend_test;
mod openai_compatible_backend_test;
