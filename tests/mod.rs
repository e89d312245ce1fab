mod rating_lookup;
