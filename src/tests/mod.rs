mod test_engine;
