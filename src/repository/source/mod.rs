mod gtfs;
